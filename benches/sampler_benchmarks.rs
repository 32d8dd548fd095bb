//! Benchmarks for the sampling core (model rebuild, scoring, engine steps).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use gibbsmotif::base::Sequence;
use gibbsmotif::model::{score_window, FrequencyModel};
use gibbsmotif::sampler::{GibbsSampler, SamplerConfig, SequenceStore};

fn random_store(count: usize, length: usize, motif_len: usize) -> SequenceStore {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let sequences = (0..count)
        .map(|_| {
            let indices: Vec<u8> = (0..length).map(|_| rng.random_range(0..4u8)).collect();
            Sequence::from_indices(indices)
        })
        .collect();
    let mut store = SequenceStore::new(sequences, motif_len).unwrap();
    store.initialize_random_windows(&mut rng);
    store
}

fn bench_model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");
    for (count, length) in [(10, 100), (50, 500), (100, 1000)] {
        let store = random_store(count, length, 8);
        let label = format!("n{count}_len{length}");
        group.bench_with_input(BenchmarkId::new("build", &label), &store, |b, store| {
            b.iter(|| black_box(FrequencyModel::build(store)));
        });
    }
    group.finish();
}

fn bench_candidate_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_scoring");
    for length in [100, 1000] {
        let store = random_store(20, length, 8);
        let model = FrequencyModel::build(&store);
        let sequence = store.sequence(0);
        let label = format!("len{length}");
        group.bench_with_input(
            BenchmarkId::new("score_all_windows", &label),
            &length,
            |b, _| {
                b.iter(|| {
                    for start in 0..=sequence.len() - 8 {
                        black_box(score_window(&model, sequence.window(start, 8)));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");
    for (count, length) in [(10, 200), (50, 500)] {
        let label = format!("n{count}_len{length}");
        group.bench_with_input(
            BenchmarkId::new("step", &label),
            &(count, length),
            |b, &(count, length)| {
                let store = random_store(count, length, 8);
                let config = SamplerConfig {
                    seed: Some(42),
                    stable_iterations: usize::MAX,
                    max_iterations: None,
                };
                let mut sampler = GibbsSampler::new(store, config);
                b.iter(|| {
                    sampler.step().unwrap();
                    black_box(sampler.log_likelihood())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_model_build,
    bench_candidate_scoring,
    bench_engine_step
);
criterion_main!(benches);
