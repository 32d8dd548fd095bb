use std::fmt;

use super::Nucleotide;
use crate::errors::InvalidNucleotide;

/// A DNA sequence stored as compact nucleotide indices (0-3).
///
/// Input is case-insensitive: `from_str` accepts both `ACGT` and `acgt`.
/// The sequence itself carries no notion of a motif window; window state
/// lives in the `SequenceStore` that owns the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Indices into the fixed DNA alphabet (A=0, C=1, G=2, T=3)
    data: Vec<u8>,
}

impl Sequence {
    /// Create from raw indices.
    pub fn from_indices(indices: Vec<u8>) -> Self {
        Self { data: indices }
    }

    /// Create from a string, accepting upper- and lowercase characters.
    pub fn from_str(s: &str) -> Result<Self, InvalidNucleotide> {
        let data: Result<Vec<u8>, _> = s
            .bytes()
            .map(|b| Nucleotide::try_from(b).map(Nucleotide::to_index))
            .collect();

        Ok(Self { data: data? })
    }

    /// Get length
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get base at position
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.data.get(index).and_then(|&idx| Nucleotide::from_index(idx))
    }

    /// Get raw indices
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.data
    }

    /// Slice of raw indices covering `[start, start + len)`.
    ///
    /// Panics if the range is out of bounds; callers hold the window
    /// invariant `start + len <= self.len()`.
    #[inline]
    pub fn window(&self, start: usize, len: usize) -> &[u8] {
        &self.data[start..start + len]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &idx in &self.data {
            if let Some(nt) = Nucleotide::from_index(idx) {
                write!(f, "{}", nt.to_char())?;
            }
        }
        Ok(())
    }
}
