//! # Token Profile

use crate::scripts::{ScriptClass, ScriptClassifier};
use crate::tokens::{CaseClass, char_len, classify, has_decimal_digit, has_special_char};
use crate::weighting::{WeightRule, WeightingEngine};

/// Every derived attribute of a single raw token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenProfile {
    /// The raw token.
    pub token: String,

    /// The token with its end-of-word marker stripped.
    pub surface: String,

    /// True if the raw token carried the end-of-word marker.
    pub is_full_word: bool,

    /// Surface length, in chars.
    pub length: usize,

    /// Script bucket of the surface.
    pub script_class: ScriptClass,

    /// Case class of the raw token.
    pub case_class: CaseClass,

    /// True if the surface contains a special char.
    pub has_special_char: bool,

    /// True if the raw token contains a decimal digit.
    pub has_digit: bool,

    /// The weighting rules which fired, in order.
    pub rules: Vec<WeightRule>,

    /// The importance weight.
    pub weight: f64,
}

impl TokenProfile {
    /// Profile a raw token.
    pub fn of(
        token: &str,
        scripts: &ScriptClassifier,
        weighting: &WeightingEngine,
    ) -> Self {
        let classified = classify(token);
        let surface = classified.surface;
        let (_, rules) = weighting.fired_rules(token);
        let weight = weighting.rules_weight(&rules);

        Self {
            token: token.to_string(),
            surface: surface.to_string(),
            is_full_word: classified.is_full_word,
            length: char_len(surface),
            script_class: scripts.classify(surface),
            case_class: CaseClass::of(token),
            has_special_char: has_special_char(surface),
            has_digit: has_decimal_digit(token),
            rules,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weighting::WeightingOptions;

    #[test]
    fn test_profile() {
        let scripts = ScriptClassifier::default();
        let weighting = WeightingEngine::default();

        let profile = TokenProfile::of("THE</w>", &scripts, &weighting);
        assert_eq!(profile.surface, "THE");
        assert!(profile.is_full_word);
        assert_eq!(profile.length, 3);
        assert_eq!(profile.script_class, ScriptClass::Latin);
        assert_eq!(profile.case_class, CaseClass::Mixed);
        assert!(!profile.has_special_char);
        assert!(!profile.has_digit);
        assert_eq!(profile.rules, vec![WeightRule::FullWord, WeightRule::Uppercase]);
        assert!((profile.weight - 1.56).abs() < 1e-9);

        let profile = TokenProfile::of("", &scripts, &weighting);
        assert_eq!(profile.script_class, ScriptClass::Other);
        assert_eq!(profile.length, 0);
        assert_eq!(profile.rules, vec![WeightRule::ShortToken]);
        assert!((profile.weight - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_profile_weight_matches_engine() {
        let scripts = ScriptClassifier::default();
        let weighting = WeightingEngine::new(
            WeightingOptions::default()
                .with_uppercase_factor(2.0)
                .with_special_char_factor(3.0),
        );

        for token in ["THE</w>", "x.y", "ABCDEFGHIJKLMNOP-</w>", "in", "é"] {
            let profile = TokenProfile::of(token, &scripts, &weighting);
            assert_eq!(profile.weight, weighting.weigh(token).weight, "{token}");
            assert_eq!(profile.weight, weighting.rules_weight(&profile.rules));
        }
    }
}
