//! Quicksort candidate benchmark suite

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use microbench_runner::benches::quicksort::{self, generate_input, InputPattern, SIZES};

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort");

    for pattern in InputPattern::ALL {
        for n in SIZES {
            let input = generate_input(0, n, pattern);
            let id = |name: &str| BenchmarkId::new(format!("{name}/{}", pattern.as_str()), n);

            group.bench_with_input(id("lomuto"), &input, |b, input| {
                b.iter_with_setup(|| input.clone(), |mut v| {
                    quicksort::lomuto(&mut v);
                    black_box(v)
                })
            });
            group.bench_with_input(id("three_way"), &input, |b, input| {
                b.iter_with_setup(|| input.clone(), |mut v| {
                    quicksort::three_way(&mut v);
                    black_box(v)
                })
            });
            group.bench_with_input(id("functional"), &input, |b, input| {
                b.iter_with_setup(|| input.clone(), |v| black_box(quicksort::functional(v)))
            });
            group.bench_with_input(id("std_unstable"), &input, |b, input| {
                b.iter_with_setup(|| input.clone(), |mut v| {
                    v.sort_unstable();
                    black_box(v)
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
