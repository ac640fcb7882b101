use std::io::Write;

use vocabscope::{
    tokens::split_full_words,
    weighting::{WeightedToken, WeightingEngine},
};

use crate::{
    input_output::{ConfigArgs, InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the weights command.
#[derive(clap::Args, Debug)]
pub struct WeightsArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Number of highest weighted tokens.
    #[arg(long, default_value = "20")]
    top: usize,

    /// Number of lowest weighted tokens.
    #[arg(long, default_value = "20")]
    bottom: usize,

    #[command(flatten)]
    logging: LogArgs,
}

impl WeightsArgs {
    /// Run the weights command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.config.report_options()?;
        let vocab = self.input.load_vocab()?;

        let (full_words, subwords) = split_full_words(vocab.iter());
        log::info!(
            "full words: {}, subwords: {}",
            full_words.len(),
            subwords.len()
        );

        let weighted = WeightingEngine::new(options.weighting).weigh_all(vocab.iter());

        let mut writer = self.output.open_writer()?;
        write_section(
            &mut writer,
            &format!("Top {} words with highest weights", self.top),
            &weighted.top(self.top),
        )?;
        write_section(
            &mut writer,
            &format!("Bottom {} words with lowest weights", self.bottom),
            &weighted.bottom(self.bottom),
        )?;
        writer.flush()?;

        Ok(())
    }
}

fn write_section(
    writer: &mut dyn Write,
    title: &str,
    tokens: &[WeightedToken],
) -> std::io::Result<()> {
    writeln!(writer, "{title}:")?;
    for token in tokens {
        writeln!(writer, "{}: {}", token.surface, token.weight)?;
    }
    writeln!(writer)
}
