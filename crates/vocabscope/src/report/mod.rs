//! # Reports
//!
//! [`ReportAssembler`] drives the analyzers over a vocabulary and produces an
//! [`AnalysisReport`]; [`ReportSink`] and [`SeriesSink`] are the seams where
//! presentation plugs in.

pub mod analysis_report;
pub mod report_assembler;
pub mod report_options;
pub mod report_sink;
pub mod token_profile;

#[doc(inline)]
pub use analysis_report::{AnalysisReport, CaseTally};
#[doc(inline)]
pub use report_assembler::ReportAssembler;
#[doc(inline)]
pub use report_options::ReportOptions;
#[doc(inline)]
pub use report_sink::{HistogramSeries, ReportSink, SeriesSink, emit_report_series};
#[doc(inline)]
pub use token_profile::TokenProfile;
