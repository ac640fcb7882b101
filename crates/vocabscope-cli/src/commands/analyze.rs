use vocabscope::{
    ReportAssembler,
    report::{ReportSink, emit_report_series},
};

use crate::{
    input_output::{ConfigArgs, InputArgs, OutputArgs},
    logging::LogArgs,
    sinks::{JsonReportSink, SvgSeriesSink, TextReportSink},
};

/// Report output format.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable tables.
    #[default]
    Text,

    /// Pretty-printed JSON.
    Json,
}

/// Args for the analyze command.
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Rows in the highest/lowest weight tables.
    #[arg(long, default_value = "20")]
    weight_rows: usize,

    /// Optional directory for SVG histograms.
    #[arg(long, default_value = None)]
    plot_dir: Option<String>,

    #[command(flatten)]
    logging: LogArgs,
}

impl AnalyzeArgs {
    /// Run the analyze command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.config.report_options()?;
        let vocab = self.input.load_vocab()?;

        let report = ReportAssembler::new(options).assemble(&vocab);

        let writer = self.output.open_writer()?;
        match self.format {
            ReportFormat::Text => {
                TextReportSink::new(writer, self.weight_rows).write_report(&report)?
            }
            ReportFormat::Json => JsonReportSink::new(writer).write_report(&report)?,
        }

        if let Some(dir) = &self.plot_dir {
            let mut sink = SvgSeriesSink::new(dir)?;
            emit_report_series(&report, &mut sink)?;
            log::info!("wrote {} plots", sink.written().len());
        }

        Ok(())
    }
}
