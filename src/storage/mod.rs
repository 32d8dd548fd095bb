//! Plain-text input and output.
//!
//! Sequence collections are read from line-delimited text files (one
//! sequence per line, case-insensitive); discovered motifs are written back
//! the same way. Parameter files are JSON.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::base::Sequence;
use crate::errors::{LoadError, ParamsError};
use crate::sampler::SamplerConfig;

/// Read a sequence collection from a text file.
///
/// Lines are trimmed and case-normalized; blank lines are skipped. Any
/// character outside {A, T, C, G} (either case) is rejected with the
/// offending line number.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, LoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut sequences = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let seq = Sequence::from_str(trimmed).map_err(|e| LoadError::InvalidChar {
            line: number + 1,
            byte: e.0,
        })?;
        sequences.push(seq);
    }
    Ok(sequences)
}

/// Write motifs to a new text file, one per line in sequence order.
///
/// The path must not already exist; an existing file yields an
/// `AlreadyExists` error so the caller can ask for a different name.
pub fn write_motifs<P: AsRef<Path>>(path: P, motifs: &[String]) -> io::Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for motif in motifs {
        writeln!(writer, "{motif}")?;
    }
    writer.flush()
}

/// Read sampler parameters from a JSON file.
///
/// Omitted fields fall back to their defaults.
pub fn read_params<P: AsRef<Path>>(path: P) -> Result<SamplerConfig, ParamsError> {
    let contents = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}
