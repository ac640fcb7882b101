//! # Script Classification
//!
//! Assigns every token exactly one [`ScriptClass`], by whole-token range
//! membership, through a [`ScriptClassifier`].

pub mod script_class;
pub mod script_classifier;

#[doc(inline)]
pub use script_class::ScriptClass;
#[doc(inline)]
pub use script_classifier::{ScriptBucket, ScriptClassifier};
