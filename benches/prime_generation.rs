#![allow(clippy::all)]
//! Benchmarks for prime generation and the timing harness around it.

mod common;

use common::harness::{harness_once, BenchBounds};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perf_primer::primes::{is_prime, PrimeNumbers};
use std::hint::black_box;

fn bench_generate_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes/generate_numbers");

    for bound in BenchBounds::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(bound), &bound, |b, &bound| {
            let mut generator = PrimeNumbers::new();
            b.iter(|| {
                generator.generate_numbers(black_box(bound));
                black_box(generator.len());
            });
        });
    }

    group.finish();
}

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes/is_prime");

    group.bench_function("large_prime", |b| {
        b.iter(|| black_box(is_prime(black_box(4_294_967_291))));
    });

    group.bench_function("even_composite", |b| {
        b.iter(|| black_box(is_prime(black_box(4_294_967_290))));
    });

    group.finish();
}

fn bench_harness_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness/run");

    group.bench_function("small_bound", |b| {
        b.iter(|| black_box(harness_once(BenchBounds::SMALL)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_numbers,
    bench_is_prime,
    bench_harness_overhead,
);
criterion_main!(benches);
