//! Criterion micro-benchmarks for adaptive array write, read, and dump paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use holdall_array::AdaptiveArray;
use holdall_bench::{dense_array, sparse_array};
use holdall_core::CloneOps;

/// Benchmark: fill 10K slots sequentially, including incremental growth.
fn bench_dense_fill_10k(c: &mut Criterion) {
    c.bench_function("array_dense_fill_10k", |b| {
        b.iter(|| {
            let arr = dense_array(10_000);
            black_box(arr.len());
        });
    });
}

/// Benchmark: a single write at index 10K on an empty array — one big growth.
fn bench_sparse_growth_write(c: &mut Criterion) {
    c.bench_function("array_sparse_growth_write", |b| {
        b.iter(|| {
            let mut arr = AdaptiveArray::new(CloneOps::<u64>::new());
            arr.set(10_000, &42).unwrap();
            black_box(arr.len());
        });
    });
}

/// Benchmark: copy-out reads across 10K occupied slots.
fn bench_read_10k(c: &mut Criterion) {
    let arr = dense_array(10_000);
    c.bench_function("array_read_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..10_000 {
                sum = sum.wrapping_add(arr.get(i).unwrap());
            }
            black_box(sum);
        });
    });
}

/// Benchmark: dump a sparse array, 1K occupied slots with long empty runs.
fn bench_dump_sparse_10k(c: &mut Criterion) {
    let arr = sparse_array(10_000, 10);
    c.bench_function("array_dump_sparse_10k", |b| {
        b.iter(|| {
            let mut out = String::new();
            arr.dump(&mut out).unwrap();
            black_box(out.len());
        });
    });
}

criterion_group!(
    benches,
    bench_dense_fill_10k,
    bench_sparse_growth_write,
    bench_read_10k,
    bench_dump_sparse_10k
);
criterion_main!(benches);
