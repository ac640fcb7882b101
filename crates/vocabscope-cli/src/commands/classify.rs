use std::io::Write;

use vocabscope::{
    report::TokenProfile,
    scripts::ScriptClassifier,
    weighting::WeightingEngine,
};

use crate::{
    input_output::{ConfigArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the classify command.
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Raw tokens, including any `</w>` marker.
    #[arg(required = true)]
    tokens: Vec<String>,

    /// Emit JSON lines instead of text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl ClassifyArgs {
    /// Run the classify command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.config.report_options()?;
        let scripts = ScriptClassifier::default();
        let engine = WeightingEngine::new(options.weighting);

        let mut writer = self.output.open_writer()?;
        for token in &self.tokens {
            let profile = TokenProfile::of(token, &scripts, &engine);
            if self.json {
                serde_json::to_writer(&mut writer, &profile)?;
                writeln!(writer)?;
            } else {
                write_profile(&mut writer, &profile)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_profile(
    writer: &mut dyn Write,
    profile: &TokenProfile,
) -> std::io::Result<()> {
    let rules = profile
        .rules
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>();

    writeln!(writer, "{:?}", profile.token)?;
    writeln!(writer, "  surface: {:?}", profile.surface)?;
    writeln!(writer, "  full word: {}", profile.is_full_word)?;
    writeln!(writer, "  length: {}", profile.length)?;
    writeln!(writer, "  script: {}", profile.script_class)?;
    writeln!(writer, "  case: {}", profile.case_class)?;
    writeln!(writer, "  special chars: {}", profile.has_special_char)?;
    writeln!(writer, "  digits: {}", profile.has_digit)?;
    writeln!(writer, "  rules: [{}]", rules.join(", "))?;
    writeln!(writer, "  weight: {}", profile.weight)
}
