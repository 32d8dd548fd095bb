//! Gibbsmotif CLI - Gibbs-sampling motif discovery over DNA sequences.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use gibbsmotif::analysis::{aligned_rows, consensus, motif_windows};
use gibbsmotif::base::{Nucleotide, Sequence};
use gibbsmotif::sampler::{GibbsSampler, SamplerConfig, SequenceStore};
use gibbsmotif::storage;

/// Gibbsmotif - Gibbs-sampling motif discovery
#[derive(Parser, Debug)]
#[command(name = "gibbsmotif")]
#[command(author, version, about = "Gibbs-sampling motif discovery over DNA sequences", long_about = None)]
struct Cli {
    /// Input file with one sequence per line
    ///
    /// Prompted for interactively when missing or unreadable.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the motif windows (must not already exist)
    ///
    /// Prompted for interactively when missing or already present.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Motif length
    ///
    /// Prompted for interactively until a positive integer is given.
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u64).range(1..))]
    length: Option<u64>,

    /// Random seed (default: nondeterministic)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON parameter file; command-line flags override its values
    #[arg(long)]
    params: Option<PathBuf>,

    /// Stop with an error after this many iterations without convergence
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Consecutive stable iterations required to declare convergence
    #[arg(long)]
    stable_iterations: Option<usize>,

    /// Number of threads for candidate scoring
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Suppress progress output and diagnostics
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let mut config = match &cli.params {
        Some(path) => storage::read_params(path)
            .with_context(|| format!("Failed to read parameter file {}", path.display()))?,
        None => SamplerConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(limit) = cli.max_iterations {
        config.max_iterations = Some(limit);
    }
    if let Some(stable) = cli.stable_iterations {
        config.stable_iterations = stable;
    }
    let max_iterations = config.max_iterations;

    let sequences = obtain_sequences(cli.input.as_deref())?;
    let motif_len = obtain_motif_length(cli.length.map(|l| l as usize))?;

    let store = SequenceStore::new(sequences, motif_len)?;
    if !cli.quiet {
        println!(
            "Searching {} sequences for a motif of length {}",
            store.len(),
            store.motif_len()
        );
        if let Some(seed) = config.seed {
            println!("Random seed: {seed}");
        }
    }

    let mut sampler = GibbsSampler::new(store, config);

    let progress = if cli.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        Some(pb)
    };

    while !sampler.is_converged() {
        if let Some(limit) = max_iterations {
            if sampler.iterations() >= limit {
                anyhow::bail!("No convergence after {limit} iterations");
            }
        }
        sampler.step()?;
        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(format!(
                "iteration {} | log score {:.3} | stable {}",
                sampler.iterations(),
                sampler.log_likelihood(),
                sampler.stable_count()
            ));
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if !cli.quiet {
        println!(
            "Converged after {} iterations (log score {:.3})",
            sampler.iterations(),
            sampler.log_likelihood()
        );
        print_diagnostics(&sampler);
    }

    let motifs = motif_windows(sampler.store());
    let written = write_output(cli.output.as_deref(), &motifs)?;
    println!("Consensus motif: {}", consensus(sampler.model()));
    println!("Motifs written to {}", written.display());

    Ok(())
}

/// Load the sequence collection, re-prompting until a readable, non-empty
/// file is given.
fn obtain_sequences(arg: Option<&Path>) -> Result<Vec<Sequence>> {
    if let Some(path) = arg {
        match storage::read_sequences(path) {
            Ok(sequences) if !sequences.is_empty() => return Ok(sequences),
            Ok(_) => println!("File {} contains no sequences.", path.display()),
            Err(e) => println!("Cannot read {}: {e}", path.display()),
        }
    }
    loop {
        let line = prompt_line("Enter the sequence file path")?;
        let path = PathBuf::from(line);
        match storage::read_sequences(&path) {
            Ok(sequences) if !sequences.is_empty() => return Ok(sequences),
            Ok(_) => println!("File {} contains no sequences.", path.display()),
            Err(e) => println!("Cannot read {}: {e}", path.display()),
        }
    }
}

/// Resolve the motif length, re-prompting until a positive integer is given.
fn obtain_motif_length(arg: Option<usize>) -> Result<usize> {
    if let Some(length) = arg {
        return Ok(length);
    }
    loop {
        let line = prompt_line("Enter the motif length")?;
        match line.parse::<usize>() {
            Ok(0) => println!("A value greater than zero is required."),
            Ok(length) => return Ok(length),
            Err(_) => println!("Must enter an integer. Try again..."),
        }
    }
}

/// Write the motifs, re-prompting while the chosen path already exists or
/// cannot be written.
fn write_output(arg: Option<&Path>, motifs: &[String]) -> Result<PathBuf> {
    let mut candidate = arg.map(Path::to_path_buf);
    loop {
        let path = match candidate.take() {
            Some(path) => path,
            None => PathBuf::from(prompt_line("Enter an output file name for the motifs")?),
        };
        match storage::write_motifs(&path, motifs) {
            Ok(()) => return Ok(path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                println!(
                    "File {} already exists. Choose a different name.",
                    path.display()
                );
            }
            Err(e) => println!("Cannot write {}: {e}", path.display()),
        }
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        anyhow::bail!("Input stream closed");
    }
    Ok(input.trim().to_string())
}

/// Console diagnostics: the frequency matrix, background vector, aligned and
/// plain sequence listings, and the candidate motifs.
fn print_diagnostics(sampler: &GibbsSampler) {
    let model = sampler.model();
    let store = sampler.store();
    let display_order = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

    println!("\nMotif model (theta):");
    for nt in display_order {
        let row: Vec<String> = (0..model.motif_len())
            .map(|offset| format!("{:.3}", model.theta(nt, offset)))
            .collect();
        println!("  {} | {}", nt.to_char(), row.join(" "));
    }

    println!("\nBackground (theta zero):");
    let background: Vec<String> = display_order
        .iter()
        .map(|&nt| format!("{}={:.3}", nt.to_char(), model.background(nt)))
        .collect();
    println!("  {}", background.join(" "));

    println!("\nSequences with aligned motif:");
    for row in aligned_rows(store) {
        println!("  {row}");
    }

    println!("\nSequences:");
    for i in 0..store.len() {
        println!("  {}", store.render(i));
    }

    println!("\nCandidate motifs:");
    for motif in motif_windows(store) {
        println!("  {motif}");
    }
    println!();
}
