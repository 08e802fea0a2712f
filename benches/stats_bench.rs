//! Performance benchmarks for statistics and folding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pointstats::{fold, Stats};

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats_sum");

    for size in [100, 1_000, 10_000].iter() {
        let v: Vec<f64> = (0..*size).map(|i| i as f64).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let s = Stats::new(&v);
            b.iter(|| black_box(s.sum()));
        });
    }
    group.finish();
}

fn bench_min_max(c: &mut Criterion) {
    let v: Vec<f64> = (0..10_000).map(|i| ((i * 7919) % 104729) as f64).collect();
    let s = Stats::new(&v);

    c.bench_function("stats_min", |b| {
        b.iter(|| black_box(s.min()));
    });

    c.bench_function("stats_max", |b| {
        b.iter(|| black_box(s.max()));
    });
}

fn bench_avg(c: &mut Criterion) {
    let v: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
    let s = Stats::new(&v);

    c.bench_function("stats_avg", |b| {
        b.iter(|| black_box(s.avg()));
    });
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    for size in [10, 100, 1_000].iter() {
        let v: Vec<i32> = (0..*size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(fold(black_box(&v), 2, 7)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sum, bench_min_max, bench_avg, bench_fold);
criterion_main!(benches);
