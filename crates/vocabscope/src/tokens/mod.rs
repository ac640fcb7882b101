//! # Token Classification
//!
//! * [`token_classifier`] - full word vs. subword; end-of-word marker stripping.
//! * [`case_class`] - lowercase / uppercase / mixed partition.
//! * [`char_classes`] - the character predicates shared by the analyzers.

pub mod case_class;
pub mod char_classes;
pub mod token_classifier;

#[doc(inline)]
pub use case_class::{CaseClass, is_all_lowercase, is_all_uppercase};
#[doc(inline)]
pub use char_classes::{
    char_len,
    has_decimal_digit,
    has_special_char,
    is_special_char,
    is_text_whitespace,
};
#[doc(inline)]
pub use token_classifier::{
    ClassifiedToken,
    END_OF_WORD_MARKER,
    classify,
    is_full_word,
    split_full_words,
    strip_marker,
};
