//! # Case Classification
//!
//! A token is "lowercase" when it has at least one cased character and none
//! of its cased characters are upper or title case; "uppercase" is the mirror
//! image. Everything else, including tokens with no cased characters at all,
//! is "mixed".

use crate::tokens::char_classes::is_titlecase;

/// Three-way case partition of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum_macros::EnumString, strum_macros::EnumIter, strum_macros::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseClass {
    /// Entirely lowercase, with at least one cased character.
    Lowercase,

    /// Entirely uppercase, with at least one cased character.
    Uppercase,

    /// Everything else.
    Mixed,
}

impl CaseClass {
    /// Classify the case of a token.
    pub fn of(text: &str) -> Self {
        if is_all_lowercase(text) {
            CaseClass::Lowercase
        } else if is_all_uppercase(text) {
            CaseClass::Uppercase
        } else {
            CaseClass::Mixed
        }
    }
}

/// True if the text has a cased character and no upper or title case ones.
pub fn is_all_lowercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() || is_titlecase(c) {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// True if the text has a cased character and no lower or title case ones.
pub fn is_all_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() || is_titlecase(c) {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
