//! # Character Predicates

use unicode_general_category::{GeneralCategory, get_general_category};

/// Is this a whitespace character?
///
/// Unicode `White_Space`, plus the information separators U+001C..=U+001F,
/// which vocabulary tooling conventionally treats as whitespace.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Is this a "special" character?
///
/// Anything which is not an ASCII letter, an ASCII digit, or
/// [`is_text_whitespace`].
pub fn is_special_char(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || is_text_whitespace(c))
}

/// Does the text contain at least one [`is_special_char`] character?
pub fn has_special_char(text: &str) -> bool {
    text.chars().any(is_special_char)
}

/// Is this a decimal digit (Unicode category `Nd`)?
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Does the text contain at least one decimal digit?
pub fn has_decimal_digit(text: &str) -> bool {
    text.chars().any(is_decimal_digit)
}

/// Is this a titlecase letter (Unicode category `Lt`)?
pub fn is_titlecase(c: char) -> bool {
    get_general_category(c) == GeneralCategory::TitlecaseLetter
}

/// The length of the text, in chars.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
