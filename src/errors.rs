use std::error;
use std::fmt;
use std::io;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidNucleotide {}

/// Errors raised while loading a sequence collection from a text file.
#[derive(Debug)]
pub enum LoadError {
    /// IO error
    Io(io::Error),
    /// A character outside {A, T, C, G} (either case) on the given line
    InvalidChar { line: usize, byte: u8 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::InvalidChar { line, byte } => {
                write!(
                    f,
                    "Invalid character '{}' on line {line}",
                    *byte as char
                )
            }
        }
    }
}

impl error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors raised while reading a sampler parameter file.
#[derive(Debug)]
pub enum ParamsError {
    /// IO error
    Io(io::Error),
    /// Parse error
    Parse(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl error::Error for ParamsError {}

impl From<io::Error> for ParamsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

/// Errors that can occur when constructing a `SequenceStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The sequence collection was empty
    Empty,
    /// The motif length was zero
    ZeroMotifLength,
    /// A sequence is shorter than the motif length
    SequenceTooShort {
        index: usize,
        len: usize,
        motif_len: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Sequence collection is empty"),
            Self::ZeroMotifLength => write!(f, "Motif length must be greater than zero"),
            Self::SequenceTooShort {
                index,
                len,
                motif_len,
            } => {
                write!(
                    f,
                    "Sequence {index} has length {len}, shorter than motif length {motif_len}"
                )
            }
        }
    }
}

impl error::Error for StoreError {}

/// Error returned when a window start would place the window outside its
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWindow {
    /// Index of the sequence in the store
    pub sequence: usize,
    /// Requested window start
    pub start: usize,
    /// Length of the sequence
    pub len: usize,
    /// Window length
    pub motif_len: usize,
}

impl fmt::Display for InvalidWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window start {} + length {} exceeds sequence {} (len = {})",
            self.start, self.motif_len, self.sequence, self.len
        )
    }
}

impl error::Error for InvalidWindow {}

/// Errors from weighted candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// No candidates were supplied
    Empty,
    /// The score sum was zero, negative, or non-finite
    ZeroScoreSum,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No candidate windows to select from"),
            Self::ZeroScoreSum => {
                write!(f, "Candidate scores do not sum to a positive finite value")
            }
        }
    }
}

impl error::Error for SelectionError {}

/// Errors raised by the sampling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerError {
    /// Weighted selection failed for the given sequence
    Selection {
        sequence: usize,
        source: SelectionError,
    },
    /// A resampled window start was out of range
    Window(InvalidWindow),
    /// The configured iteration bound was reached without convergence
    IterationLimit { limit: usize },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection { sequence, source } => {
                write!(f, "Resampling sequence {sequence} failed: {source}")
            }
            Self::Window(e) => write!(f, "Window error: {e}"),
            Self::IterationLimit { limit } => {
                write!(f, "No convergence after {limit} iterations")
            }
        }
    }
}

impl error::Error for SamplerError {}

impl From<InvalidWindow> for SamplerError {
    fn from(e: InvalidWindow) -> Self {
        Self::Window(e)
    }
}
