//! # Vocabulary
//!
//! This module provides the [`Vocabulary`] value and its io mechanisms.

pub mod io;
pub mod vocabulary;

#[doc(inline)]
pub use vocabulary::Vocabulary;
