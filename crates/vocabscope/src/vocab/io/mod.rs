//! # Vocabulary IO

pub mod bpe_vocab_io;

#[doc(inline)]
pub use bpe_vocab_io::{load_bpe_vocab_path, read_bpe_vocab};
