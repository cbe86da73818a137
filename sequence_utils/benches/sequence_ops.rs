//! Traversal and search benchmarks

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sequence_utils::*;

fn sparse_sequence(len: usize) -> Sequence<f64> {
    Sequence::from_slots(
        (0..len)
            .map(|i| if i % 7 == 3 { None } else { Some(i as f64) })
            .collect(),
    )
}

fn benchmark_traversal(c: &mut Criterion) {
    let s = sparse_sequence(10_000);

    c.bench_function("map_10k", |b| {
        b.iter(|| black_box(map(&s, |v, _, _| v.copied().unwrap_or(0.0) * 2.0)))
    });
    c.bench_function("filter_10k", |b| {
        b.iter(|| black_box(filter(&s, |v, _, _| *v > 5_000.0)))
    });
    c.bench_function("reduce_10k", |b| {
        b.iter(|| black_box(fold(&s, 0.0, |acc, v, _, _| acc + v.copied().unwrap_or(0.0))))
    });
}

fn benchmark_search(c: &mut Criterion) {
    let s = sparse_sequence(10_000);

    c.bench_function("includes_nan_10k", |b| {
        b.iter(|| black_box(includes(&s, &f64::NAN, None)))
    });
    c.bench_function("last_index_of_10k", |b| {
        b.iter(|| black_box(last_index_of(&s, &0.0, None)))
    });
}

criterion_group!(benches, benchmark_traversal, benchmark_search);
criterion_main!(benches);
