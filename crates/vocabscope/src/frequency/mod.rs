//! # Frequency Tables
//!
//! * [`FrequencyTable`] - insertion-ordered counts with stable ranking.
//! * [`FrequencyAnalyzer`] - token, length, affix, and special-char counts.

pub mod frequency_analyzer;
pub mod frequency_table;

#[doc(inline)]
pub use frequency_analyzer::{FrequencyAnalyzer, FrequencyAnalyzerOptions};
#[doc(inline)]
pub use frequency_table::{FrequencyEntry, FrequencyTable};
