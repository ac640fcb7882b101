//! # Frequency Analyzer
//!
//! Independent, pure reductions of a token sequence into [`FrequencyTable`]s.

use crate::frequency::FrequencyTable;
use crate::tokens::{char_len, has_decimal_digit, is_special_char, strip_marker};

/// Default prefix / suffix length, in chars.
pub const DEFAULT_AFFIX_LEN: usize = 2;

/// Options for [`FrequencyAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrequencyAnalyzerOptions {
    /// Prefix / suffix length, in chars.
    ///
    /// Tokens shorter than this contribute themselves whole.
    pub affix_len: usize,
}

impl Default for FrequencyAnalyzerOptions {
    fn default() -> Self {
        Self {
            affix_len: DEFAULT_AFFIX_LEN,
        }
    }
}

impl FrequencyAnalyzerOptions {
    /// Set the prefix / suffix length.
    pub fn with_affix_len(
        self,
        affix_len: usize,
    ) -> Self {
        Self { affix_len }
    }
}

/// Builds the frequency tables of a vocabulary.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    /// The config options.
    pub options: FrequencyAnalyzerOptions,
}

impl FrequencyAnalyzer {
    /// Create a new analyzer.
    pub fn new(options: FrequencyAnalyzerOptions) -> Self {
        Self { options }
    }

    /// Count each exact raw token string.
    ///
    /// Counts above one only arise from duplicated vocabulary lines.
    pub fn token_frequency<'a, I>(
        &self,
        tokens: I,
    ) -> FrequencyTable<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().map(str::to_string).collect()
    }

    /// Count tokens by the char length of their surface form.
    pub fn length_distribution<'a, I>(
        &self,
        tokens: I,
    ) -> FrequencyTable<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .map(|token| char_len(strip_marker(token)))
            .collect()
    }

    /// Count the prefixes and suffixes of subword tokens.
    ///
    /// ## Returns
    /// `(prefix_counts, suffix_counts)`.
    pub fn affix_frequency<'a, I>(
        &self,
        subwords: I,
    ) -> (FrequencyTable<String>, FrequencyTable<String>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut prefix_counts = FrequencyTable::new();
        let mut suffix_counts = FrequencyTable::new();
        for token in subwords {
            prefix_counts.increment(char_prefix(token, self.options.affix_len).to_string());
            suffix_counts.increment(char_suffix(token, self.options.affix_len).to_string());
        }
        (prefix_counts, suffix_counts)
    }

    /// Count every special character of the raw tokens, markers included.
    pub fn special_char_frequency<'a, I>(
        &self,
        tokens: I,
    ) -> FrequencyTable<char>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .flat_map(str::chars)
            .filter(|&c| is_special_char(c))
            .collect()
    }

    /// The tokens containing at least one decimal digit, in order.
    pub fn numeric_tokens<'a, I>(
        &self,
        tokens: I,
    ) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter(|token| has_decimal_digit(token))
            .collect()
    }

    /// The mean surface char length.
    ///
    /// ## Returns
    /// `None` for an empty sequence.
    pub fn average_length<'a, I>(
        &self,
        tokens: I,
    ) -> Option<f64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (count, total) = tokens
            .into_iter()
            .fold((0usize, 0usize), |(count, total), token| {
                (count + 1, total + char_len(strip_marker(token)))
            });
        if count == 0 {
            None
        } else {
            Some(total as f64 / count as f64)
        }
    }
}

/// The first `n` chars of `text`; all of it when shorter.
pub fn char_prefix(
    text: &str,
    n: usize,
) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The last `n` chars of `text`; all of it when shorter.
pub fn char_suffix(
    text: &str,
    n: usize,
) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
