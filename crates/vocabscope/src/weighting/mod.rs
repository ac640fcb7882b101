//! # Importance Weighting
//!
//! A multiplicative heuristic over token surfaces:
//! * [`WeightingOptions`] - the factors, thresholds, and stop words.
//! * [`WeightingEngine`] - applies the [`WeightRule`]s in order.
//! * [`WeightedTokens`] - the insertion-ordered result mapping.

pub mod weighted_tokens;
pub mod weighting_engine;
pub mod weighting_options;

#[doc(inline)]
pub use weighted_tokens::{WeightedToken, WeightedTokens};
#[doc(inline)]
pub use weighting_engine::{BASE_WEIGHT, WeightRule, WeightingEngine};
#[doc(inline)]
pub use weighting_options::{DEFAULT_STOP_WORDS, WeightingOptions};
