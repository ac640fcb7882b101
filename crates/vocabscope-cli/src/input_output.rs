use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
};

use vocabscope::{ReportOptions, Vocabulary, vocab::io::read_bpe_vocab};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional vocabulary file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read the vocabulary from the input.
    pub fn load_vocab(&self) -> Result<Vocabulary, Box<dyn std::error::Error>> {
        match &self.input {
            Some(p) if p != "-" => log::info!("vocabulary: {p}"),
            _ => log::info!("vocabulary: <stdin>"),
        }
        let vocab = read_bpe_vocab(self.open_reader()?)?;
        log::info!("loaded {} tokens", vocab.len());
        Ok(vocab)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Analysis configuration arg group.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Optional JSON file of report options; missing fields use defaults.
    #[clap(long, default_value = None)]
    pub config: Option<String>,

    /// Override every top-K table limit.
    #[arg(long, default_value = None)]
    pub top_k: Option<usize>,

    /// Compute independent tables in parallel.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub parallel: bool,
}

impl ConfigArgs {
    /// Build the report options.
    pub fn report_options(&self) -> Result<ReportOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("config: {path}");
                let reader = BufReader::new(File::open(path)?);
                serde_json::from_reader::<_, ReportOptions>(reader)?
            }
            None => ReportOptions::default(),
        };

        if let Some(k) = self.top_k {
            options = options.with_top_k(k);
        }
        if self.parallel {
            options = options.with_parallel(true);
        }

        options.validate()?;
        log::debug!("report options: {options:?}");
        Ok(options)
    }
}
