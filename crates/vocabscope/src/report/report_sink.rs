//! # Report Sinks
//!
//! Presentation is external to the analysis: printers, plotters, and
//! serializers implement these traits, and the core never links a
//! rendering library.

use crate::VSResult;
use crate::report::AnalysisReport;

/// A labeled bar series, ready for a histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramSeries {
    /// A short machine-friendly name; used for file names.
    pub name: String,

    /// The chart title.
    pub title: String,

    /// The x-axis description.
    pub x_label: String,

    /// The y-axis description.
    pub y_label: String,

    /// `(label, value)` bars, in display order.
    pub bars: Vec<(String, u64)>,
}

impl HistogramSeries {
    /// The largest bar value; `0` for an empty series.
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|(_, v)| *v).max().unwrap_or(0)
    }
}

/// Consumes whole reports.
pub trait ReportSink {
    /// Render or forward a report.
    fn write_report(
        &mut self,
        report: &AnalysisReport,
    ) -> VSResult<()>;
}

/// Consumes raw histogram series.
pub trait SeriesSink {
    /// Render or forward one series.
    fn write_series(
        &mut self,
        series: &HistogramSeries,
    ) -> VSResult<()>;
}

/// Feed every histogram series of a report to a sink.
pub fn emit_report_series(
    report: &AnalysisReport,
    sink: &mut dyn SeriesSink,
) -> VSResult<()> {
    for series in report.histogram_series() {
        log::debug!("emitting series: {}", series.name);
        sink.write_series(&series)?;
    }
    Ok(())
}
