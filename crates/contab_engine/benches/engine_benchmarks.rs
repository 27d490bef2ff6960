//! Criterion benchmarks for the table sampler and batch driver.
//!
//! Measures single-table sampling throughput across margin sizes and
//! batch scaling across worker counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use contab_core::{LogFactorialTable, Margins};
use contab_engine::{
    generate_table_with, generate_tables, GeneratorConfig, SampleStream, SeedSource,
};

/// Square margins with `dim` rows/columns of `weight` each.
fn uniform_margins(dim: usize, weight: i64) -> Margins<i64> {
    Margins::new(vec![weight; dim], vec![weight; dim]).expect("valid margins")
}

/// Benchmark single-table sampling for growing margin sizes.
fn bench_single_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_table");

    for dim in [5, 20, 50] {
        let margins = uniform_margins(dim, 20);
        let log_fact = LogFactorialTable::for_margins(&margins).expect("table");
        let mut out = vec![0_i64; margins.cells()];

        group.bench_with_input(BenchmarkId::new("sample", dim), &margins, |b, margins| {
            let mut stream = SampleStream::from_seed(42);
            b.iter(|| {
                generate_table_with(
                    black_box(margins),
                    black_box(&log_fact),
                    &mut stream,
                    &mut out,
                )
                .expect("sampling succeeds");
            });
        });
    }

    group.finish();
}

/// Benchmark batch generation across worker counts.
fn bench_batch_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_workers");
    group.sample_size(10);

    let margins = uniform_margins(10, 20);

    for workers in [1, 2, 4, 8] {
        let config = GeneratorConfig::builder()
            .count(2000)
            .workers(workers)
            .seed(SeedSource::Explicit(42))
            .build()
            .expect("valid config");

        group.bench_with_input(
            BenchmarkId::new("generate", workers),
            &config,
            |b, config| {
                b.iter(|| generate_tables(black_box(config), black_box(&margins), None));
            },
        );
    }

    group.finish();
}

/// Benchmark log-factorial table construction.
fn bench_log_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_factorial");

    for total in [1_000_u64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("build", total), &total, |b, &total| {
            b.iter(|| LogFactorialTable::build(black_box(total)).expect("allocation"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_table,
    bench_batch_workers,
    bench_log_factorial
);
criterion_main!(benches);
