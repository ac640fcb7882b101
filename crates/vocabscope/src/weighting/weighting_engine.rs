//! # Weighting Engine
//!
//! The heuristic is a fixed pipeline: classify, strip the end-of-word marker,
//! then test the surface against each [`WeightRule`] in declaration order.

use crate::tokens::{char_len, classify, has_special_char, is_all_uppercase};
use crate::weighting::{WeightedToken, WeightedTokens, WeightingOptions};

/// The base weight, before any rule fires.
pub const BASE_WEIGHT: f64 = 1.0;

/// The heuristic rules, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum_macros::EnumString, strum_macros::EnumIter, strum_macros::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightRule {
    /// The raw token carried the end-of-word marker.
    FullWord,

    /// The surface has a special character.
    SpecialChar,

    /// The surface is all uppercase, and not a single char.
    Uppercase,

    /// The surface is long.
    LongToken,

    /// The surface is short and not a stop word.
    ShortToken,
}

/// Computes per-token importance weights.
#[derive(Debug, Clone, Default)]
pub struct WeightingEngine {
    options: WeightingOptions,
}

impl WeightingEngine {
    /// Create a new engine.
    pub fn new(options: WeightingOptions) -> Self {
        Self { options }
    }

    /// The heuristic options.
    pub fn options(&self) -> &WeightingOptions {
        &self.options
    }

    /// The rules which fire for a raw token, in application order.
    ///
    /// ## Returns
    /// `(surface, rules)`.
    pub fn fired_rules<'a>(
        &self,
        token: &'a str,
    ) -> (&'a str, Vec<WeightRule>) {
        let options = &self.options;
        let classified = classify(token);
        let surface = classified.surface;
        let len = char_len(surface);

        let mut rules = Vec::new();
        if classified.is_full_word {
            rules.push(WeightRule::FullWord);
        }
        if has_special_char(surface) {
            rules.push(WeightRule::SpecialChar);
        }
        if is_all_uppercase(surface) && len > options.uppercase_min_len {
            rules.push(WeightRule::Uppercase);
        }
        if len > options.long_token_threshold {
            rules.push(WeightRule::LongToken);
        }
        if len < options.short_token_threshold
            && !options.is_stop_word(surface)
        {
            rules.push(WeightRule::ShortToken);
        }
        (surface, rules)
    }

    /// Weigh a single raw token.
    pub fn weigh(
        &self,
        token: &str,
    ) -> WeightedToken {
        let (surface, rules) = self.fired_rules(token);
        WeightedToken::new(surface, self.rules_weight(&rules))
    }

    /// The weight produced by a set of fired rules.
    pub fn rules_weight(
        &self,
        rules: &[WeightRule],
    ) -> f64 {
        rules
            .iter()
            .fold(BASE_WEIGHT, |weight, &rule| weight * self.options.factor(rule))
    }

    /// Weigh every token of a sequence.
    ///
    /// Tokens sharing a surface collide; the last one's weight wins.
    pub fn weigh_all<'a, I>(
        &self,
        tokens: I,
    ) -> WeightedTokens
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut weighted = WeightedTokens::new();
        for token in tokens {
            weighted.insert(self.weigh(token));
        }
        weighted
    }
}
