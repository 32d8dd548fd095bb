//! Gibbs sampling engine.
//!
//! This module provides the main sampling loop: leave one sequence out,
//! rebuild the frequency model from the rest, rescore every candidate window
//! of the held-out sequence, resample one by weight, and test the total
//! log-likelihood for convergence.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::errors::SamplerError;
use crate::model::{log_likelihood_sum, score_window, FrequencyModel};
use crate::sampler::{weighted_choice, SamplerConfig, SequenceStore};

/// Engine state after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerStatus {
    /// Resampling iterations are still running
    Sampling,
    /// The stable counter reached its target; the store is frozen
    Converged,
}

/// Gibbs sampling engine.
///
/// Construction performs the initialization phase: every sequence receives a
/// uniformly random window, the initial model and log-likelihood are
/// computed, and the stable counter is zeroed. Each `step` then resamples
/// one sequence's window. All randomness flows through a single
/// `Xoshiro256++` generator owned by the engine, seeded from the
/// configuration for reproducible runs.
#[derive(Debug)]
pub struct GibbsSampler {
    /// Sequence collection and window state
    store: SequenceStore,
    /// Run parameters
    config: SamplerConfig,
    /// Random number generator shared by every draw
    rng: Xoshiro256PlusPlus,
    /// Model over the current (fully marked) store
    model: FrequencyModel,
    /// Total log10 likelihood of the current marking
    log_score: f64,
    /// Consecutive iterations with an unchanged truncated log score
    stable: usize,
    /// Completed resampling iterations
    iterations: usize,
    /// Current state
    status: SamplerStatus,
}

impl GibbsSampler {
    /// Create an engine and run the initialization phase.
    pub fn new(mut store: SequenceStore, config: SamplerConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        store.initialize_random_windows(&mut rng);
        let model = FrequencyModel::build(&store);
        let log_score = log_likelihood_sum(&model, &store);

        Self {
            store,
            config,
            rng,
            model,
            log_score,
            stable: 0,
            iterations: 0,
            status: SamplerStatus::Sampling,
        }
    }

    /// The sequence store with its current marking.
    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    /// The model over the current marking.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The run configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Total log10 likelihood of the current marking.
    pub fn log_likelihood(&self) -> f64 {
        self.log_score
    }

    /// Consecutive iterations with an unchanged truncated log score.
    pub fn stable_count(&self) -> usize {
        self.stable
    }

    /// Completed resampling iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Current state.
    pub fn status(&self) -> SamplerStatus {
        self.status
    }

    /// Whether the engine has converged.
    pub fn is_converged(&self) -> bool {
        self.status == SamplerStatus::Converged
    }

    /// Run one resampling iteration.
    ///
    /// Picks a sequence uniformly, unmarks it, rebuilds the model from the
    /// remainder, scores every candidate window of the held-out sequence,
    /// resamples one by weight, remarks it, rebuilds the model, and updates
    /// the stable counter by comparing the integer-truncated old and new
    /// log-likelihood sums. Once converged, further calls leave the store
    /// untouched.
    pub fn step(&mut self) -> Result<SamplerStatus, SamplerError> {
        if self.status == SamplerStatus::Converged {
            return Ok(self.status);
        }

        let chosen = self.rng.random_range(0..self.store.len());
        self.store.unmark(chosen);

        // Model with the chosen sequence contributing only background.
        let held_out = FrequencyModel::build(&self.store);

        let motif_len = self.store.motif_len();
        let candidates = self.store.candidate_count(chosen);
        let sequence = self.store.sequence(chosen);

        // Candidate scores are independent; compute them in parallel and
        // join before the selection draw.
        let scores: Vec<f64> = (0..candidates)
            .into_par_iter()
            .map(|start| score_window(&held_out, sequence.window(start, motif_len)))
            .collect();

        // A degenerate score sum (all zero, or non-finite when the
        // background vanishes) cannot drive the wheel; the window is then
        // redrawn uniformly instead.
        let total: f64 = scores.iter().sum();
        let selected = if total > 0.0 && total.is_finite() {
            weighted_choice(&scores, &mut self.rng).map_err(|source| {
                SamplerError::Selection {
                    sequence: chosen,
                    source,
                }
            })?
        } else {
            self.rng.random_range(0..scores.len())
        };
        self.store.set_window(chosen, selected)?;

        self.model = FrequencyModel::build(&self.store);
        let next_score = log_likelihood_sum(&self.model, &self.store);

        if next_score as i64 == self.log_score as i64 {
            self.stable += 1;
        } else {
            self.stable = 0;
        }
        self.log_score = next_score;
        self.iterations += 1;

        if self.stable >= self.config.stable_iterations {
            self.status = SamplerStatus::Converged;
        }
        Ok(self.status)
    }

    /// Run until convergence.
    ///
    /// # Errors
    /// Returns `SamplerError::IterationLimit` if a configured
    /// `max_iterations` bound is reached first; without a bound the loop
    /// runs until the stable counter reaches its target.
    pub fn run(&mut self) -> Result<(), SamplerError> {
        while self.status != SamplerStatus::Converged {
            if let Some(limit) = self.config.max_iterations {
                if self.iterations >= limit {
                    return Err(SamplerError::IterationLimit { limit });
                }
            }
            self.step()?;
        }
        Ok(())
    }
}
