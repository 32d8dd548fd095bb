//! Sequence collection with per-sequence motif window state.

use rand::Rng;

use crate::base::{Nucleotide, Sequence};
use crate::errors::{InvalidWindow, StoreError};

/// An ordered collection of sequences plus, per sequence, the start of the
/// window currently marked as the candidate motif.
///
/// The motif length is fixed at construction and shared by every window.
/// Invariants held by construction: the collection is non-empty, the motif
/// length is at least one, and every sequence is at least motif-length long.
/// A marked sequence carries exactly one window of exactly that length; an
/// unmarked sequence carries none.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    /// The sequences in this store
    sequences: Vec<Sequence>,
    /// Current window start per sequence; `None` = unmarked
    windows: Vec<Option<usize>>,
    /// Shared motif window length
    motif_len: usize,
}

impl SequenceStore {
    /// Create a new store over a sequence collection.
    ///
    /// # Errors
    /// Returns an error if the collection is empty, the motif length is
    /// zero, or any sequence is shorter than the motif length.
    pub fn new(sequences: Vec<Sequence>, motif_len: usize) -> Result<Self, StoreError> {
        if motif_len == 0 {
            return Err(StoreError::ZeroMotifLength);
        }
        if sequences.is_empty() {
            return Err(StoreError::Empty);
        }
        for (index, seq) in sequences.iter().enumerate() {
            if seq.len() < motif_len {
                return Err(StoreError::SequenceTooShort {
                    index,
                    len: seq.len(),
                    motif_len,
                });
            }
        }

        let windows = vec![None; sequences.len()];
        Ok(Self {
            sequences,
            windows,
            motif_len,
        })
    }

    /// Number of sequences in the store.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Check if the store is empty (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The shared motif window length.
    pub fn motif_len(&self) -> usize {
        self.motif_len
    }

    /// All sequences as a slice.
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// A specific sequence by index.
    pub fn sequence(&self, index: usize) -> &Sequence {
        &self.sequences[index]
    }

    /// Current window start of sequence `index`, if marked.
    pub fn window(&self, index: usize) -> Option<usize> {
        self.windows[index]
    }

    /// Number of currently marked sequences.
    pub fn marked_count(&self) -> usize {
        self.windows.iter().filter(|w| w.is_some()).count()
    }

    /// Number of candidate window starts for sequence `index`.
    pub fn candidate_count(&self, index: usize) -> usize {
        self.sequences[index].len() - self.motif_len + 1
    }

    /// Mark every sequence at a uniformly random window start.
    pub fn initialize_random_windows<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (seq, window) in self.sequences.iter().zip(self.windows.iter_mut()) {
            let max_start = seq.len() - self.motif_len;
            *window = Some(rng.random_range(0..=max_start));
        }
    }

    /// Remove the window mark from sequence `index`, leaving it all
    /// background.
    pub fn unmark(&mut self, index: usize) {
        self.windows[index] = None;
    }

    /// Mark a new window on sequence `index`, replacing any previous mark.
    pub fn set_window(&mut self, index: usize, start: usize) -> Result<(), InvalidWindow> {
        let len = self.sequences[index].len();
        if start + self.motif_len > len {
            return Err(InvalidWindow {
                sequence: index,
                start,
                len,
                motif_len: self.motif_len,
            });
        }
        self.windows[index] = Some(start);
        Ok(())
    }

    /// The marked window of sequence `index` as an index slice, if marked.
    pub fn marked_window(&self, index: usize) -> Option<&[u8]> {
        self.windows[index]
            .map(|start| self.sequences[index].window(start, self.motif_len))
    }

    /// Render sequence `index` with the marked window uppercase and all
    /// background characters lowercase.
    pub fn render(&self, index: usize) -> String {
        let seq = &self.sequences[index];
        let window = self.windows[index];
        let mut out = String::with_capacity(seq.len());
        for (pos, &idx) in seq.indices().iter().enumerate() {
            if let Some(nt) = Nucleotide::from_index(idx) {
                let in_window =
                    matches!(window, Some(s) if pos >= s && pos < s + self.motif_len);
                if in_window {
                    out.push(nt.to_char());
                } else {
                    out.push(nt.to_lower_char());
                }
            }
        }
        out
    }
}
