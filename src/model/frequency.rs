//! Position-specific frequency model over the current window marking.

use rayon::prelude::*;

use crate::base::Nucleotide;
use crate::sampler::SequenceStore;

/// Position-frequency matrix for the marked windows plus background
/// nucleotide frequencies.
///
/// `theta` holds one `[A, C, G, T]` column per window offset: the fraction
/// of sequences whose marked window carries that nucleotide at that offset.
/// The divisor is the total number of sequences in the store, marked or not,
/// so a temporarily unmarked sequence dilutes every column while still
/// counting toward the denominator. `background` is the nucleotide
/// composition of everything outside the marked windows.
///
/// A model is rebuilt from scratch before scoring and again after
/// resampling; it is never updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    /// One column per window offset, indexed by `Nucleotide::to_index`
    theta: Vec<[f64; 4]>,
    /// Background frequencies, indexed by `Nucleotide::to_index`
    background: [f64; 4],
}

impl FrequencyModel {
    /// Build a model from the store's current marking.
    pub fn build(store: &SequenceStore) -> Self {
        let motif_len = store.motif_len();
        let divisor = store.len() as f64;

        let mut theta = vec![[0.0f64; 4]; motif_len];
        for (offset, column) in theta.iter_mut().enumerate() {
            let mut counts = [0u64; 4];
            for i in 0..store.len() {
                if let Some(window) = store.marked_window(i) {
                    counts[window[offset] as usize] += 1;
                }
            }
            for nt in 0..4 {
                column[nt] = counts[nt] as f64 / divisor;
            }
        }

        // Background counts are independent per sequence; reduce in parallel.
        let counts = (0..store.len())
            .into_par_iter()
            .map(|i| {
                let seq = store.sequence(i);
                let window = store.window(i);
                let mut counts = [0u64; 4];
                for (pos, &idx) in seq.indices().iter().enumerate() {
                    let in_window =
                        matches!(window, Some(s) if pos >= s && pos < s + motif_len);
                    if !in_window {
                        counts[idx as usize] += 1;
                    }
                }
                counts
            })
            .reduce(
                || [0u64; 4],
                |mut acc, item| {
                    for nt in 0..4 {
                        acc[nt] += item[nt];
                    }
                    acc
                },
            );

        let total: u64 = counts.iter().sum();
        let mut background = [0.0f64; 4];
        for nt in 0..4 {
            background[nt] = counts[nt] as f64 / total as f64;
        }

        Self { theta, background }
    }

    /// Window length this model was built for.
    pub fn motif_len(&self) -> usize {
        self.theta.len()
    }

    /// Motif frequency of `nt` at window offset `offset`.
    #[inline]
    pub fn theta(&self, nt: Nucleotide, offset: usize) -> f64 {
        self.theta[offset][nt.to_index() as usize]
    }

    /// All columns of the position-frequency matrix.
    #[inline]
    pub fn columns(&self) -> &[[f64; 4]] {
        &self.theta
    }

    /// The `[A, C, G, T]` column at window offset `offset`.
    #[inline]
    pub fn column(&self, offset: usize) -> [f64; 4] {
        self.theta[offset]
    }

    /// Background frequency of `nt`.
    #[inline]
    pub fn background(&self, nt: Nucleotide) -> f64 {
        self.background[nt.to_index() as usize]
    }

    /// The background frequency vector `[A, C, G, T]`.
    #[inline]
    pub fn background_vector(&self) -> [f64; 4] {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Sequence;

    const TOLERANCE: f64 = 1e-12;

    fn store_with_windows(raw: &[&str], motif_len: usize, starts: &[usize]) -> SequenceStore {
        let sequences = raw
            .iter()
            .map(|s| Sequence::from_str(s).unwrap())
            .collect();
        let mut store = SequenceStore::new(sequences, motif_len).unwrap();
        for (i, &start) in starts.iter().enumerate() {
            store.set_window(i, start).unwrap();
        }
        store
    }

    // ===== Theta Tests =====

    #[test]
    fn test_theta_columns_sum_to_one_when_fully_marked() {
        let store = store_with_windows(
            &["acgtacgtacgt", "ttacgtacggca", "cgacgtgatacg"],
            5,
            &[0, 3, 6],
        );
        let model = FrequencyModel::build(&store);

        for offset in 0..model.motif_len() {
            let sum: f64 = model.column(offset).iter().sum();
            assert!((sum - 1.0).abs() < TOLERANCE, "column {offset} sums to {sum}");
        }
    }

    #[test]
    fn test_theta_identity_columns() {
        // All three windows sit on an "acgt" occurrence.
        let store = store_with_windows(&["acgtacgt", "ttacgtac", "cgacgtga"], 4, &[4, 2, 2]);
        let model = FrequencyModel::build(&store);

        assert_eq!(model.theta(Nucleotide::A, 0), 1.0);
        assert_eq!(model.theta(Nucleotide::C, 1), 1.0);
        assert_eq!(model.theta(Nucleotide::G, 2), 1.0);
        assert_eq!(model.theta(Nucleotide::T, 3), 1.0);
        assert_eq!(model.theta(Nucleotide::T, 0), 0.0);
    }

    #[test]
    fn test_theta_divisor_is_total_sequence_count() {
        // One sequence unmarked: columns sum to (n-1)/n, not 1.
        let mut store = store_with_windows(&["acgtacgt", "ttacgtac", "cgacgtga"], 4, &[4, 2, 2]);
        store.unmark(2);
        let model = FrequencyModel::build(&store);

        for offset in 0..model.motif_len() {
            let sum: f64 = model.column(offset).iter().sum();
            assert!(
                (sum - 2.0 / 3.0).abs() < TOLERANCE,
                "diluted column {offset} sums to {sum}"
            );
        }
    }

    #[test]
    fn test_theta_mixed_column() {
        let store = store_with_windows(&["aacc", "ttcc", "aagg", "ttgg"], 2, &[0, 0, 0, 0]);
        let model = FrequencyModel::build(&store);

        assert_eq!(model.theta(Nucleotide::A, 0), 0.5);
        assert_eq!(model.theta(Nucleotide::T, 0), 0.5);
        assert_eq!(model.theta(Nucleotide::C, 0), 0.0);
        assert_eq!(model.theta(Nucleotide::A, 1), 0.5);
        assert_eq!(model.theta(Nucleotide::T, 1), 0.5);
    }

    // ===== Background Tests =====

    #[test]
    fn test_background_sums_to_one() {
        let store = store_with_windows(
            &["acgtacgtacgt", "ttacgtacggca", "cgacgtgatacg"],
            5,
            &[0, 3, 6],
        );
        let model = FrequencyModel::build(&store);

        let sum: f64 = model.background_vector().iter().sum();
        assert!((sum - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_background_uniform_composition() {
        // Outside the windows each nucleotide appears exactly 3 times.
        let store = store_with_windows(&["acgtacgt", "ttacgtac", "cgacgtga"], 4, &[4, 2, 2]);
        let model = FrequencyModel::build(&store);

        for nt in Nucleotide::ALL {
            assert!((model.background(nt) - 0.25).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_background_includes_unmarked_sequences() {
        let mut store = store_with_windows(&["aaaa", "cccc"], 2, &[0, 0]);
        store.unmark(1);
        let model = FrequencyModel::build(&store);

        // Background: "aa" from sequence 0 plus all of "cccc".
        assert!((model.background(Nucleotide::A) - 2.0 / 6.0).abs() < TOLERANCE);
        assert!((model.background(Nucleotide::C) - 4.0 / 6.0).abs() < TOLERANCE);
        assert_eq!(model.background(Nucleotide::G), 0.0);
    }

    #[test]
    fn test_model_rebuild_matches() {
        let store = store_with_windows(&["acgtacgt", "ttacgtac", "cgacgtga"], 4, &[4, 2, 2]);
        let first = FrequencyModel::build(&store);
        let second = FrequencyModel::build(&store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_model_motif_len() {
        let store = store_with_windows(&["acgtacgt"], 3, &[1]);
        let model = FrequencyModel::build(&store);
        assert_eq!(model.motif_len(), 3);
    }
}
