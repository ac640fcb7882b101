//! # Report Options

use crate::frequency::FrequencyAnalyzerOptions;
use crate::weighting::WeightingOptions;
use crate::{VSResult, VocabScopeError};

/// Options for [`ReportAssembler`](crate::report::ReportAssembler).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportOptions {
    /// How many of the most frequent tokens to keep.
    pub top_tokens: usize,

    /// How many of the most frequent prefixes / suffixes to keep.
    pub top_affixes: usize,

    /// How many of the most frequent special chars to keep.
    pub top_special_chars: usize,

    /// How many numeric tokens to sample.
    pub number_sample: usize,

    /// How many full words / subwords to sample.
    pub word_sample: usize,

    /// Frequency analyzer options.
    pub frequency: FrequencyAnalyzerOptions,

    /// Weighting heuristic options.
    pub weighting: WeightingOptions,

    /// Compute independent tables in parallel.
    ///
    /// Requires the "rayon" feature; ignored otherwise.
    pub parallel: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_tokens: 20,
            top_affixes: 10,
            top_special_chars: 20,
            number_sample: 20,
            word_sample: 20,
            frequency: FrequencyAnalyzerOptions::default(),
            weighting: WeightingOptions::default(),
            parallel: false,
        }
    }
}

impl ReportOptions {
    /// Set every top-K limit at once.
    pub fn with_top_k(
        self,
        k: usize,
    ) -> Self {
        Self {
            top_tokens: k,
            top_affixes: k,
            top_special_chars: k,
            ..self
        }
    }

    /// Set the sample sizes.
    pub fn with_samples(
        self,
        word_sample: usize,
        number_sample: usize,
    ) -> Self {
        Self {
            word_sample,
            number_sample,
            ..self
        }
    }

    /// Set the frequency analyzer options.
    pub fn with_frequency(
        self,
        frequency: FrequencyAnalyzerOptions,
    ) -> Self {
        Self { frequency, ..self }
    }

    /// Set the weighting options.
    pub fn with_weighting(
        self,
        weighting: WeightingOptions,
    ) -> Self {
        Self { weighting, ..self }
    }

    /// Sets the configured parallelism value.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Check that the weighting factors keep every weight positive.
    ///
    /// ## Errors
    /// [`VocabScopeError::Config`] naming the first bad factor.
    pub fn validate(&self) -> VSResult<()> {
        let w = &self.weighting;
        for (name, factor) in [
            ("full_word_factor", w.full_word_factor),
            ("special_char_factor", w.special_char_factor),
            ("uppercase_factor", w.uppercase_factor),
            ("long_token_factor", w.long_token_factor),
            ("short_token_factor", w.short_token_factor),
        ] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(VocabScopeError::Config(format!(
                    "{name} must be finite and positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}
