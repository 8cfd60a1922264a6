//! Fibonacci candidate benchmark suite
//!
//! Cross-checks the runner's own numbers with criterion's sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use microbench_runner::benches::fibonacci::{self, FibMemo, RECURSIVE_MAX_N, SIZES};

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");

    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| fibonacci::iterative(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("matrix", n), &n, |b, &n| {
            b.iter(|| fibonacci::matrix(black_box(n)))
        });

        // Cold memo: a fresh table per call.
        group.bench_with_input(BenchmarkId::new("memoized_cold", n), &n, |b, &n| {
            b.iter_with_setup(FibMemo::default, |mut memo| {
                fibonacci::memoized(black_box(n), &mut memo)
            })
        });

        if n <= RECURSIVE_MAX_N {
            group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
                b.iter(|| fibonacci::recursive(black_box(n)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
