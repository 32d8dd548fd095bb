//! Result extraction from a converged run.
//!
//! This module derives the consensus motif, the per-sequence motif windows,
//! and a motif-aligned rendering of the collection.

mod alignment;
mod consensus;

pub use alignment::aligned_rows;
pub use consensus::{consensus, motif_windows};
