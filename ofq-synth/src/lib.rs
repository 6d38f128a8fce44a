//! Synthetic oceanographic profile generation.
//!
//! Profiles are plausible in shape rather than scientifically validated:
//! each value follows a deterministic regional/seasonal/depth model with
//! bounded stochastic perturbation.

pub mod model;
pub mod synthesizer;

pub use synthesizer::{ProfileSynthesizer, ReducedSynthesizer, SynthesisStrategy};
