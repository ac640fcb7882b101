//! # Script Buckets

/// The script / language bucket of a token.
///
/// Declaration order is the default classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum_macros::EnumString, strum_macros::EnumIter, strum_macros::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptClass {
    /// ASCII letters only.
    Latin,

    /// The Cyrillic block.
    Cyrillic,

    /// CJK Unified Ideographs.
    Chinese,

    /// Hiragana and Katakana.
    Japanese,

    /// Hangul Syllables.
    Korean,

    /// Mixed scripts, digits, punctuation, and empty tokens.
    Other,
}
