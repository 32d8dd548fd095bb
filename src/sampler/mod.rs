//! Sampling engine, sequence store, and candidate selection.
//!
//! This module provides the core resampling loop and the state it operates
//! on: the window-marked sequence collection, weighted candidate selection,
//! and run parameters.

pub mod engine;
pub mod parameters;
pub mod store;
pub mod weighted;

pub use engine::{GibbsSampler, SamplerStatus};
pub use parameters::{SamplerConfig, DEFAULT_STABLE_ITERATIONS};
pub use store::SequenceStore;
pub use weighted::weighted_choice;
