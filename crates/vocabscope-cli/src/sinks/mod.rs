//! Report and series sinks for the CLI.

pub mod json_sink;
pub mod svg_sink;
pub mod text_sink;

pub use json_sink::JsonReportSink;
pub use svg_sink::SvgSeriesSink;
pub use text_sink::TextReportSink;
