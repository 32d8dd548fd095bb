//! Motif-aligned rendering of the sequence collection.

use crate::sampler::SequenceStore;

/// Render every sequence with its marked window uppercase, left-padded so
/// that all motif starts line up under the maximum marked offset.
///
/// Unmarked sequences are treated as starting at offset zero.
pub fn aligned_rows(store: &SequenceStore) -> Vec<String> {
    let max_start = (0..store.len())
        .filter_map(|i| store.window(i))
        .max()
        .unwrap_or(0);

    (0..store.len())
        .map(|i| {
            let pad = max_start - store.window(i).unwrap_or(0);
            format!("{}{}", " ".repeat(pad), store.render(i))
        })
        .collect()
}
