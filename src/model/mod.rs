//! Frequency model and window scoring.
//!
//! This module derives the position-frequency matrix and background
//! composition from a store's current marking, and scores candidate windows
//! against them.

mod frequency;
pub mod score;

pub use frequency::FrequencyModel;
pub use score::{log_likelihood_sum, score_window};
