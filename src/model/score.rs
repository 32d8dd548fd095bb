//! Relative-likelihood scoring of candidate windows.

use crate::model::FrequencyModel;
use crate::sampler::SequenceStore;

/// Relative likelihood that `window` was emitted by the motif model rather
/// than background.
///
/// The numerator is the product over window offsets of the motif frequency
/// of the nucleotide found there. The denominator is the product of all four
/// background frequencies, a constant of the background reference model that
/// does not depend on the window's actual composition. The constant cancels
/// when ranking candidates within one resampling step but enters every
/// absolute score reported.
pub fn score_window(model: &FrequencyModel, window: &[u8]) -> f64 {
    debug_assert_eq!(window.len(), model.motif_len());

    let background = model.background_vector();
    let denominator = background[0] * background[1] * background[2] * background[3];

    let mut numerator = 1.0;
    for (offset, &idx) in window.iter().enumerate() {
        numerator *= model.columns()[offset][idx as usize];
    }

    numerator / denominator
}

/// Sum of `log10` scores of every marked window in the store.
///
/// Convergence detection only; the engine compares successive sums after
/// truncation to integers.
pub fn log_likelihood_sum(model: &FrequencyModel, store: &SequenceStore) -> f64 {
    (0..store.len())
        .filter_map(|i| store.marked_window(i))
        .map(|window| score_window(model, window).log10())
        .sum()
}
