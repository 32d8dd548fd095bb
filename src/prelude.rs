//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use gibbsmotif::prelude::*;
//!
//! let sequences = vec![
//!     Sequence::from_str("acgtacgt").unwrap(),
//!     Sequence::from_str("acgtacgt").unwrap(),
//!     Sequence::from_str("acgtacgt").unwrap(),
//! ];
//! let store = SequenceStore::new(sequences, 4).unwrap();
//! let mut sampler = GibbsSampler::new(store, SamplerConfig::new(Some(42)));
//! sampler.step().unwrap();
//! ```

pub use crate::analysis::{aligned_rows, consensus, motif_windows};
pub use crate::base::{Nucleotide, Sequence};
pub use crate::errors::{
    InvalidNucleotide, InvalidWindow, LoadError, SamplerError, SelectionError, StoreError,
};
pub use crate::model::{log_likelihood_sum, score_window, FrequencyModel};
pub use crate::sampler::{
    weighted_choice, GibbsSampler, SamplerConfig, SamplerStatus, SequenceStore,
};
