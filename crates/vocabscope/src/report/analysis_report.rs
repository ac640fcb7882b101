//! # Analysis Report

use crate::frequency::FrequencyEntry;
use crate::report::HistogramSeries;
use crate::scripts::ScriptClass;
use crate::weighting::WeightedToken;

/// Lowercase / uppercase / mixed token tally.
///
/// `mixed` is whatever is neither lowercase nor uppercase, so
/// `lowercase + uppercase + mixed` is always the vocabulary size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseTally {
    /// Entirely lowercase tokens.
    pub lowercase: usize,

    /// Entirely uppercase tokens.
    pub uppercase: usize,

    /// Everything else.
    pub mixed: usize,
}

/// Every statistic computed over a vocabulary.
///
/// A plain value; rendering is left to a
/// [`ReportSink`](crate::report::ReportSink).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisReport {
    /// The number of tokens.
    pub total_size: usize,

    /// The number of tokens carrying the end-of-word marker.
    pub full_word_count: usize,

    /// The number of subword fragments.
    pub subword_count: usize,

    /// The first few full words, marker stripped.
    pub full_word_sample: Vec<String>,

    /// The first few subwords.
    pub subword_sample: Vec<String>,

    /// Mean surface length in chars; `None` for an empty vocabulary.
    pub average_length: Option<f64>,

    /// `(surface length, count)`, by ascending length.
    pub length_distribution: Vec<FrequencyEntry<usize>>,

    /// The most frequent raw tokens.
    pub top_tokens: Vec<FrequencyEntry<String>>,

    /// The most frequent subword prefixes.
    pub top_prefixes: Vec<FrequencyEntry<String>>,

    /// The most frequent subword suffixes.
    pub top_suffixes: Vec<FrequencyEntry<String>>,

    /// The most frequent special chars.
    pub top_special_chars: Vec<FrequencyEntry<char>>,

    /// Every special char, most frequent first; ties in first-seen order.
    pub special_chars: Vec<FrequencyEntry<char>>,

    /// The number of distinct special chars.
    pub distinct_special_chars: usize,

    /// The total number of special char occurrences.
    pub special_char_total: usize,

    /// Case tally over the raw tokens.
    pub case_counts: CaseTally,

    /// Script tally, one entry per [`ScriptClass`] in bucket order.
    pub script_counts: Vec<FrequencyEntry<ScriptClass>>,

    /// The number of tokens containing a decimal digit.
    pub numeric_token_count: usize,

    /// The first few tokens containing a decimal digit.
    pub numeric_token_sample: Vec<String>,

    /// Every weighted surface, heaviest first; ties in vocabulary order.
    pub weighted_tokens: Vec<WeightedToken>,

    /// Mean weight; `None` for an empty vocabulary.
    pub average_weight: Option<f64>,
}

impl AnalysisReport {
    /// The `n` heaviest surfaces.
    pub fn top_weighted(
        &self,
        n: usize,
    ) -> &[WeightedToken] {
        &self.weighted_tokens[..n.min(self.weighted_tokens.len())]
    }

    /// The `n` lightest surfaces; ties in vocabulary order.
    pub fn bottom_weighted(
        &self,
        n: usize,
    ) -> Vec<WeightedToken> {
        // Re-sorting the stable descending order keeps ties in vocabulary order.
        let mut ascending = self.weighted_tokens.clone();
        ascending.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        ascending.truncate(n);
        ascending
    }

    /// The count for a script bucket.
    pub fn script_count(
        &self,
        class: ScriptClass,
    ) -> usize {
        self.script_counts
            .iter()
            .find(|e| e.key == class)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// The raw numeric series behind the report's histograms.
    pub fn histogram_series(&self) -> Vec<HistogramSeries> {
        vec![
            HistogramSeries {
                name: "token_lengths".to_string(),
                title: "Token Length Distribution".to_string(),
                x_label: "Length".to_string(),
                y_label: "Frequency".to_string(),
                bars: self
                    .length_distribution
                    .iter()
                    .map(|e| (e.key.to_string(), e.count as u64))
                    .collect(),
            },
            HistogramSeries {
                name: "special_chars".to_string(),
                title: "Special Character Distribution".to_string(),
                x_label: "Character".to_string(),
                y_label: "Frequency".to_string(),
                bars: self
                    .special_chars
                    .iter()
                    .map(|e| (e.key.to_string(), e.count as u64))
                    .collect(),
            },
        ]
    }
}
