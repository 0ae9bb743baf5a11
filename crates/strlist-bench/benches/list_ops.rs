//! Criterion micro-benchmarks for end insertion, removal, and copies.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strlist::ListArray;
use strlist_bench::{mixed_ops, run_ops, values};

const N: usize = 1_000;

/// Benchmark: push_back N payloads starting from capacity 1 (all growth steps).
fn bench_push_back_from_one(c: &mut Criterion) {
    let payloads = values(N, 1);
    c.bench_function("push_back_1k_from_cap_1", |b| {
        b.iter(|| {
            let mut list = ListArray::with_capacity(1);
            for v in &payloads {
                list.push_back(v.as_str());
            }
            black_box(list.size());
        });
    });
}

/// Benchmark: push_front N payloads (quadratic shifting).
fn bench_push_front(c: &mut Criterion) {
    let payloads = values(N, 2);
    c.bench_function("push_front_1k", |b| {
        b.iter(|| {
            let mut list = ListArray::new();
            for v in &payloads {
                list.push_front(v.as_str());
            }
            black_box(list.size());
        });
    });
}

/// Benchmark: replay a seeded mix of end operations.
fn bench_mixed_ops(c: &mut Criterion) {
    let payloads = values(64, 3);
    let ops = mixed_ops(N, payloads.len(), 3);
    c.bench_function("mixed_end_ops_1k", |b| {
        b.iter(|| {
            let mut list = ListArray::new();
            run_ops(&mut list, &ops, &payloads);
            black_box(list.size());
        });
    });
}

/// Benchmark: clone versus assign into a buffer that is already large enough.
fn bench_copy(c: &mut Criterion) {
    let source: ListArray = values(N, 4).into();
    c.bench_function("clone_1k", |b| {
        b.iter(|| black_box(source.clone()));
    });

    let mut target = ListArray::with_capacity(2 * N);
    c.bench_function("assign_reuse_1k", |b| {
        b.iter(|| {
            target.assign(&source);
            black_box(target.size());
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_from_one,
    bench_push_front,
    bench_mixed_ops,
    bench_copy
);
criterion_main!(benches);
