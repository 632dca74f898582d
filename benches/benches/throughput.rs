//! Criterion benchmarks across the three length classes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;
use umash::Params;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn demo_params() -> Params {
    let mut key = [0u8; Params::SIZE];
    key.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
    Params::from_le_bytes(&key).unwrap()
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot-path latency for short inputs (hash-map keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let params = demo_params();
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (8, "8B"),
        (16, "16B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| umash::hash(&params, 42, 0, black_box(data)));
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Block-compression throughput for large inputs.
fn bench_throughput(c: &mut Criterion) {
    let params = demo_params();
    let mut group = c.benchmark_group("2-Throughput");

    let sizes = [
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
        (8 * MB, "8MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| umash::hash(&params, 42, 0, black_box(data)));
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: FINGERPRINT
// =============================================================================

/// Fingerprint cost relative to a single digest.
fn bench_fingerprint(c: &mut Criterion) {
    let params = demo_params();
    let mut group = c.benchmark_group("3-Fingerprint");

    let sizes = [(16, "16B"), (KB, "1KB"), (MB, "1MB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| umash::fingerprint(&params, 42, black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_latency,
    bench_throughput,
    bench_fingerprint
);
criterion_main!(benches);
