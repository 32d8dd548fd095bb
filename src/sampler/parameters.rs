//! Sampler configuration.

use serde::{Deserialize, Serialize};

/// Consecutive stable iterations required to declare convergence.
pub const DEFAULT_STABLE_ITERATIONS: usize = 20;

/// Run parameters for the sampling engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
    /// Consecutive iterations with an unchanged truncated log-likelihood
    /// required to declare convergence
    pub stable_iterations: usize,
    /// Optional safety bound on total iterations; `None` runs until
    /// convergence
    pub max_iterations: Option<usize>,
}

impl SamplerConfig {
    /// Create a configuration with the given seed and default convergence
    /// settings.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            stable_iterations: DEFAULT_STABLE_ITERATIONS,
            max_iterations: None,
        }
    }
}
