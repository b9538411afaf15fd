//! Constraint-satisfying synthetic value generation.
//!
//! The synthesizer never errors: when no meaningful literal can be
//! produced it degrades to [`SyntheticValue::Null`], which callers report
//! as a warning rather than aborting the generation request.

pub mod synthesizer;
pub mod value;

pub use synthesizer::{SynthOptions, ValueSynthesizer};
pub use value::SyntheticValue;
