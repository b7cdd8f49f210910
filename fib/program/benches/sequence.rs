use std::{hint::black_box, time::Duration};

use criterion::*;
use fib_sequence::{compute, compute_checked, compute_into};

criterion_group! {
  name = sequence;
  config = Criterion::default().warm_up_time(Duration::from_millis(500));
  targets = bench_example, bench_sweep
}

criterion_main!(sequence);

const EXAMPLE_N: isize = 15;

fn bench_example(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("fib_sequence_n_{EXAMPLE_N}"));

    group.bench_function("compute", |b| {
        b.iter(|| compute(black_box(EXAMPLE_N)));
    });

    group.bench_function("compute_into", |b| {
        let mut buf = vec![0u64; EXAMPLE_N as usize + 1];
        b.iter(|| compute_into(black_box(EXAMPLE_N), black_box(&mut buf)));
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_sequence_sweep");

    for n in [15isize, 64, 93] {
        group.throughput(Throughput::Elements(n as u64 + 1));
        group.bench_with_input(BenchmarkId::new("compute", n), &n, |b, &n| {
            b.iter(|| compute(black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("compute_checked", n), &n, |b, &n| {
            b.iter(|| compute_checked(black_box(n)));
        });
    }

    group.finish();
}
