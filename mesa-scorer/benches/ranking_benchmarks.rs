//! Criterion benchmarks for the ranking pass.
//!
//! Measures ranking time across dataset sizes with both filters enabled, and
//! the cost of building the dashboard report from a finished ranking.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package mesa-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mesa_core::{Dataset, RankingConfig};
use mesa_scorer::report::{DEFAULT_HISTOGRAM_BINS, Report};
use mesa_scorer::Ranker;


use bench_support::{BENCHMARK_SEED, generate_listings};

/// Dataset sizes to benchmark.
const DATASET_SIZES: &[usize] = &[100, 1_000, 10_000];

fn city_ranker() -> Ranker {
    let config = RankingConfig::builder()
        .bounds(32.40, 32.60, -117.15, -116.85)
        .denylist(["oxxo", "7-eleven"])
        .build()
        .unwrap_or_else(|err| panic!("benchmark config must be valid: {err}"));
    Ranker::new(config)
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let ranker = city_ranker();

    for &size in DATASET_SIZES {
        // Parse outside the loop; the pass itself is what we measure.
        let dataset = Dataset::from_raw(&generate_listings(size, BENCHMARK_SEED));

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for benchmark dataset sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("listings", size), &dataset, |b, dataset| {
            b.iter(|| ranker.rank(dataset));
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let ranker = city_ranker();
    let bins = NonZeroUsize::new(DEFAULT_HISTOGRAM_BINS).unwrap_or(NonZeroUsize::MIN);

    for &size in DATASET_SIZES {
        let ranking = ranker.rank_raw(&generate_listings(size, BENCHMARK_SEED));
        group.bench_with_input(BenchmarkId::new("listings", size), &ranking, |b, ranking| {
            b.iter(|| Report::build(ranking, bins));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank, bench_report);
criterion_main!(benches);
