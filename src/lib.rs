//! Gibbsmotif: Gibbs-sampling motif discovery for DNA sequence collections.
//!
//! This library searches a collection of DNA sequences for a shared
//! fixed-length motif by iterative stochastic resampling: each iteration
//! holds one sequence out, rebuilds a position-frequency model from the
//! rest, rescores every candidate window of the held-out sequence against
//! the background, and resamples its window by weight. The run converges
//! once the integer part of the total log-likelihood has been stable for a
//! configured number of consecutive iterations.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod model;
pub mod prelude;
pub mod sampler;
pub mod storage;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when running a motif search.
pub use base::{Nucleotide, Sequence};
pub use model::FrequencyModel;
pub use sampler::{GibbsSampler, SamplerConfig, SamplerStatus, SequenceStore};
