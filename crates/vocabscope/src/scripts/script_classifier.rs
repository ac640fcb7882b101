//! # Script Classifier

use core::ops::RangeInclusive;

use crate::scripts::ScriptClass;

/// `[A-Za-z]`.
pub const LATIN_RANGES: &[RangeInclusive<char>] = &['A'..='Z', 'a'..='z'];

/// Cyrillic, U+0400..=U+04FF.
pub const CYRILLIC_RANGES: &[RangeInclusive<char>] = &['\u{0400}'..='\u{04FF}'];

/// CJK Unified Ideographs, U+4E00..=U+9FFF.
pub const CHINESE_RANGES: &[RangeInclusive<char>] = &['\u{4E00}'..='\u{9FFF}'];

/// Hiragana U+3040..=U+309F and Katakana U+30A0..=U+30FF.
pub const JAPANESE_RANGES: &[RangeInclusive<char>] = &['\u{3040}'..='\u{30FF}'];

/// Hangul Syllables, U+AC00..=U+D7A3.
pub const KOREAN_RANGES: &[RangeInclusive<char>] = &['\u{AC00}'..='\u{D7A3}'];

/// A script bucket and the character ranges which make it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBucket {
    /// The bucket assigned on a match.
    pub class: ScriptClass,

    /// The admissible character ranges.
    pub ranges: Vec<RangeInclusive<char>>,
}

impl ScriptBucket {
    /// Create a new bucket.
    pub fn new(
        class: ScriptClass,
        ranges: &[RangeInclusive<char>],
    ) -> Self {
        Self {
            class,
            ranges: ranges.to_vec(),
        }
    }

    /// Is this char in one of the bucket's ranges?
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.ranges.iter().any(|r| r.contains(&c))
    }

    /// Does every char of a non-empty text fall in the bucket?
    pub fn matches(
        &self,
        text: &str,
    ) -> bool {
        !text.is_empty() && text.chars().all(|c| self.contains(c))
    }
}

/// Whole-token script classifier.
///
/// Buckets are tried in order; the first whose ranges contain every char of
/// the token wins. Tokens matching no bucket are [`ScriptClass::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptClassifier {
    buckets: Vec<ScriptBucket>,
}

impl Default for ScriptClassifier {
    fn default() -> Self {
        Self::new(vec![
            ScriptBucket::new(ScriptClass::Latin, LATIN_RANGES),
            ScriptBucket::new(ScriptClass::Cyrillic, CYRILLIC_RANGES),
            ScriptBucket::new(ScriptClass::Chinese, CHINESE_RANGES),
            ScriptBucket::new(ScriptClass::Japanese, JAPANESE_RANGES),
            ScriptBucket::new(ScriptClass::Korean, KOREAN_RANGES),
        ])
    }
}

impl ScriptClassifier {
    /// Build a classifier from an ordered bucket table.
    pub fn new(buckets: Vec<ScriptBucket>) -> Self {
        Self { buckets }
    }

    /// The ordered bucket table.
    pub fn buckets(&self) -> &[ScriptBucket] {
        &self.buckets
    }

    /// Classify a surface token.
    pub fn classify(
        &self,
        surface: &str,
    ) -> ScriptClass {
        self.buckets
            .iter()
            .find(|bucket| bucket.matches(surface))
            .map(|bucket| bucket.class)
            .unwrap_or(ScriptClass::Other)
    }
}
