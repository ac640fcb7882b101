//! # `vocabscope` BPE Vocabulary Analysis
//!
//! Composition statistics and a heuristic importance score for
//! byte-pair-encoding vocabularies, such as CLIP's `bpe_simple_vocab_16e6.txt`.
//!
//! Tokens ending in the `</w>` marker are "full words"; everything else is a
//! "subword" fragment.
//!
//! See:
//! * [`tokens`] to classify tokens and strip end-of-word markers.
//! * [`scripts`] to bucket tokens by script.
//! * [`frequency`] for token, length, affix, and special-char counts.
//! * [`weighting`] for the importance heuristic.
//! * [`report`] to assemble everything into an [`AnalysisReport`].
//! * [`vocab`] for the [`Vocabulary`] value and its loader.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``serde``
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! This swaps all HashMap implementations for ``ahash`` (or ``foldhash``).
//!
//! This is done by the ``types::VSHashMap`` type alias machinery.
//!
//! #### feature: ``serde``
//!
//! Derives ``serde`` traits on reports and options.
//!
//! #### feature: ``rayon``
//!
//! With [`ReportOptions::parallel`] set, independent tables are computed
//! in parallel. Results are identical to the sequential path.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vocabscope::{ReportAssembler, ReportOptions, vocab::io::load_bpe_vocab_path};
//!
//! let vocab = load_bpe_vocab_path("bpe_simple_vocab_16e6.txt")?;
//! let report = ReportAssembler::new(ReportOptions::default()).assemble(&vocab);
//!
//! println!("full words: {}", report.full_word_count);
//! for token in report.top_weighted(10) {
//!     println!("{}: {}", token.surface, token.weight);
//! }
//! # Ok::<(), vocabscope::VocabScopeError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod frequency;
pub mod report;
pub mod scripts;
pub mod tokens;
pub mod types;
pub mod vocab;
pub mod weighting;

#[doc(inline)]
pub use errors::{VSResult, VocabScopeError};
#[doc(inline)]
pub use report::{AnalysisReport, ReportAssembler, ReportOptions};
#[doc(inline)]
pub use vocab::Vocabulary;
