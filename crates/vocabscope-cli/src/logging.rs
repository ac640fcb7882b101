use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderrlog verbosity for a `-v` count, or `default` when unset.
    pub fn log_level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let level = if let Some(verbose) = self.verbose
            && verbose > 0
        {
            verbose
        } else {
            default
        };

        match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
