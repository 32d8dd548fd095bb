//! End-to-end sampling workflow tests.
//!
//! Runs the engine on collections with a planted motif and checks recovery
//! of the planted pattern. A single chain is a stochastic heuristic and can
//! settle on a shifted local optimum, so recovery is asserted across a small
//! set of restart seeds.

use gibbsmotif::analysis::{consensus, motif_windows};
use gibbsmotif::base::Sequence;
use gibbsmotif::errors::SamplerError;
use gibbsmotif::sampler::{GibbsSampler, SamplerConfig, SequenceStore};

/// Six sequences, each containing `GGATCC` exactly once; the first carries
/// it at offset zero and the second at the rightmost offset.
const PLANTED_GGATCC: [&str; 6] = [
    "ggatccacgt",
    "acgtggatcc",
    "ctggatccta",
    "taggatccgt",
    "agggatcctc",
    "gcggatccat",
];

/// Five longer sequences sharing `TACCGATTGC`.
const PLANTED_TACCGATTGC: [&str; 5] = [
    "taccgattgcacgtacgt",
    "acgtacgttaccgattgc",
    "gtcataccgattgcggca",
    "aacgtaccgattgctgtg",
    "cgtaccgattgcatgcat",
];

fn store_from(raw: &[&str], motif_len: usize) -> SequenceStore {
    let sequences = raw
        .iter()
        .map(|s| Sequence::from_str(s).unwrap())
        .collect();
    SequenceStore::new(sequences, motif_len).unwrap()
}

/// Run one seeded chain to convergence, bounded at 2,000 iterations.
fn run_chain(raw: &[&str], motif_len: usize, seed: u64) -> Result<GibbsSampler, SamplerError> {
    let config = SamplerConfig {
        seed: Some(seed),
        max_iterations: Some(2_000),
        ..SamplerConfig::default()
    };
    let mut sampler = GibbsSampler::new(store_from(raw, motif_len), config);
    sampler.run().map(|()| sampler)
}

#[test]
fn test_planted_length_6_motif_recovered() {
    let motif = "GGATCC";
    let mut recovered = None;

    for seed in [1, 2, 3] {
        let sampler = match run_chain(&PLANTED_GGATCC, motif.len(), seed) {
            Ok(sampler) => sampler,
            Err(SamplerError::IterationLimit { .. }) => continue,
            Err(other) => panic!("unexpected sampler error: {other}"),
        };
        assert!(sampler.is_converged());
        assert!(sampler.iterations() < 2_000);
        if consensus(sampler.model()) == motif {
            recovered = Some(sampler);
            break;
        }
    }

    let sampler = recovered.expect("no restart recovered the planted motif");

    // Nearly every window sits on the planted occurrence; the consensus
    // tolerates a single straggler.
    let windows = motif_windows(sampler.store());
    assert_eq!(windows.len(), PLANTED_GGATCC.len());
    let on_motif = windows.iter().filter(|w| w.as_str() == motif).count();
    assert!(on_motif + 1 >= windows.len());
}

#[test]
fn test_planted_length_10_motif_recovered() {
    let motif = "TACCGATTGC";
    let mut recovered = false;

    for seed in [7, 8] {
        let sampler = match run_chain(&PLANTED_TACCGATTGC, motif.len(), seed) {
            Ok(sampler) => sampler,
            Err(SamplerError::IterationLimit { .. }) => continue,
            Err(other) => panic!("unexpected sampler error: {other}"),
        };
        if consensus(sampler.model()) == motif {
            recovered = true;
            break;
        }
    }

    assert!(recovered, "no restart recovered the planted motif");
}

#[test]
fn test_seeded_runs_reproduce_exactly() {
    let run = |seed: u64| {
        let config = SamplerConfig {
            seed: Some(seed),
            max_iterations: Some(5_000),
            ..SamplerConfig::default()
        };
        let mut sampler =
            GibbsSampler::new(store_from(&PLANTED_TACCGATTGC, 10), config);
        // Outcome aside, the trajectory must be identical for equal seeds.
        let _ = sampler.run();
        (
            sampler.iterations(),
            sampler.log_likelihood().to_bits(),
            motif_windows(sampler.store()),
            consensus(sampler.model()),
        )
    };

    assert_eq!(run(3), run(3));
}

#[test]
fn test_model_invariants_hold_during_sampling() {
    let config = SamplerConfig::new(Some(11));
    let mut sampler = GibbsSampler::new(store_from(&PLANTED_GGATCC, 6), config);

    for _ in 0..100 {
        if sampler.is_converged() {
            break;
        }
        sampler.step().unwrap();

        let model = sampler.model();
        for offset in 0..model.motif_len() {
            let sum: f64 = model.column(offset).iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
        let background: f64 = model.background_vector().iter().sum();
        assert!((background - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_store_rejects_sequence_shorter_than_motif() {
    let sequences = vec![
        Sequence::from_str("acgtacgtac").unwrap(),
        Sequence::from_str("acgt").unwrap(),
    ];
    let err = SequenceStore::new(sequences, 6).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("shorter than motif length"));
}
