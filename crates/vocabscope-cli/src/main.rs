mod commands;
mod input_output;
mod logging;
mod sinks;

use clap::Parser;
use commands::Commands;

/// vscope: BPE vocabulary analysis.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let args = Args::try_parse_from([
            "vscope",
            "analyze",
            "--input",
            "vocab.txt",
            "--format",
            "json",
            "--top-k",
            "5",
            "-vv",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Analyze(_)));
    }
}
