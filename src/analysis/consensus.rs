//! Consensus motif and per-sequence motif extraction.

use crate::base::Nucleotide;
use crate::model::FrequencyModel;
use crate::sampler::SequenceStore;

/// Tie-break priority when two bases share the maximal frequency: the first
/// base in this order wins.
const CONSENSUS_ORDER: [Nucleotide; 4] = [
    Nucleotide::A,
    Nucleotide::T,
    Nucleotide::C,
    Nucleotide::G,
];

/// The per-offset most frequent nucleotide of the motif model.
pub fn consensus(model: &FrequencyModel) -> String {
    (0..model.motif_len())
        .map(|offset| {
            let mut best = CONSENSUS_ORDER[0];
            let mut max = model.theta(best, offset);
            for &nt in &CONSENSUS_ORDER[1..] {
                let value = model.theta(nt, offset);
                if value > max {
                    max = value;
                    best = nt;
                }
            }
            best.to_char()
        })
        .collect()
}

/// The marked window of each sequence as an uppercase string, in sequence
/// order. Sequences without a mark are skipped.
pub fn motif_windows(store: &SequenceStore) -> Vec<String> {
    (0..store.len())
        .filter_map(|i| store.marked_window(i))
        .map(|window| {
            window
                .iter()
                .filter_map(|&idx| Nucleotide::from_index(idx))
                .map(Nucleotide::to_char)
                .collect()
        })
        .collect()
}
