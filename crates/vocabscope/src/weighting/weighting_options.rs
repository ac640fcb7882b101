//! # Weighting Options

use crate::weighting::WeightRule;

/// The default stop words, exempt from the short-token penalty.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "of", "to", "in", "for", "on", "at", "is", "are",
];

/// Factors and thresholds of the importance heuristic.
///
/// Every rule multiplies the running weight (starting at `1.0`) by its
/// factor when it fires.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightingOptions {
    /// Factor for tokens carrying the end-of-word marker.
    pub full_word_factor: f64,

    /// Factor for surfaces containing a special character.
    pub special_char_factor: f64,

    /// Factor for all-uppercase surfaces.
    pub uppercase_factor: f64,

    /// The uppercase rule needs a surface longer than this.
    pub uppercase_min_len: usize,

    /// Factor for long surfaces.
    pub long_token_factor: f64,

    /// The long-token rule needs a surface longer than this.
    pub long_token_threshold: usize,

    /// Factor for short, non-stop-word surfaces.
    pub short_token_factor: f64,

    /// The short-token rule needs a surface shorter than this.
    pub short_token_threshold: usize,

    /// Words exempt from the short-token rule, matched case-insensitively.
    pub stop_words: Vec<String>,
}

impl Default for WeightingOptions {
    fn default() -> Self {
        Self {
            full_word_factor: 1.2,
            special_char_factor: 1.1,
            uppercase_factor: 1.3,
            uppercase_min_len: 1,
            long_token_factor: 1.2,
            long_token_threshold: 15,
            short_token_factor: 0.8,
            short_token_threshold: 3,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WeightingOptions {
    /// The multiplier applied when `rule` fires.
    pub fn factor(
        &self,
        rule: WeightRule,
    ) -> f64 {
        match rule {
            WeightRule::FullWord => self.full_word_factor,
            WeightRule::SpecialChar => self.special_char_factor,
            WeightRule::Uppercase => self.uppercase_factor,
            WeightRule::LongToken => self.long_token_factor,
            WeightRule::ShortToken => self.short_token_factor,
        }
    }

    /// Is `word` a stop word? Case-insensitive on both sides.
    pub fn is_stop_word(
        &self,
        word: &str,
    ) -> bool {
        let lower = || word.chars().flat_map(char::to_lowercase);
        self.stop_words
            .iter()
            .any(|w| w.chars().flat_map(char::to_lowercase).eq(lower()))
    }

    /// Set the full-word factor.
    pub fn with_full_word_factor(
        self,
        full_word_factor: f64,
    ) -> Self {
        Self {
            full_word_factor,
            ..self
        }
    }

    /// Set the special-char factor.
    pub fn with_special_char_factor(
        self,
        special_char_factor: f64,
    ) -> Self {
        Self {
            special_char_factor,
            ..self
        }
    }

    /// Set the uppercase factor.
    pub fn with_uppercase_factor(
        self,
        uppercase_factor: f64,
    ) -> Self {
        Self {
            uppercase_factor,
            ..self
        }
    }

    /// Set the long-token factor and threshold.
    pub fn with_long_token(
        self,
        long_token_factor: f64,
        long_token_threshold: usize,
    ) -> Self {
        Self {
            long_token_factor,
            long_token_threshold,
            ..self
        }
    }

    /// Set the short-token factor and threshold.
    pub fn with_short_token(
        self,
        short_token_factor: f64,
        short_token_threshold: usize,
    ) -> Self {
        Self {
            short_token_factor,
            short_token_threshold,
            ..self
        }
    }

    /// Replace the stop-word list.
    pub fn with_stop_words<I, S>(
        self,
        stop_words: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            ..self
        }
    }
}
