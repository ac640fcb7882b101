use crate::commands::{analyze::AnalyzeArgs, classify::ClassifyArgs, weights::WeightsArgs};

pub mod analyze;
pub mod classify;
pub mod weights;

/// Subcommands for vscope
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the full composition report for a vocabulary.
    Analyze(AnalyzeArgs),

    /// List the highest and lowest weighted tokens.
    Weights(WeightsArgs),

    /// Show every derived attribute of individual tokens.
    Classify(ClassifyArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Analyze(cmd) => cmd.run(),
            Commands::Weights(cmd) => cmd.run(),
            Commands::Classify(cmd) => cmd.run(),
        }
    }
}
