//! Benchmarks for the sequence helpers
//!
//! Run with: `cargo bench --bench array_ext`

use arrayext_core::{ArrayExt, Nested, array};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_set_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_ops");

    for size in [8, 64, 512] {
        let a: Vec<u32> = (0..size).collect();
        let b: Vec<u32> = (0..size).step_by(3).collect();

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bench, _| {
            bench.iter(|| black_box(array::difference(black_box(&a), black_box(&b))));
        });

        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bench, _| {
            bench.iter(|| black_box(array::intersection(black_box(&a), black_box(&b))));
        });
    }

    group.finish();
}

fn bench_frequencies(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequencies");

    for size in [16, 256, 4096] {
        let seq: Vec<u32> = (0..size).map(|i| i % 17).collect();

        group.bench_with_input(BenchmarkId::new("u32_mod_17", size), &seq, |bench, seq| {
            bench.iter(|| black_box(seq.frequencies()));
        });
    }

    group.finish();
}

fn bench_find_last_index(c: &mut Criterion) {
    let seq: Vec<u32> = (0..1024).collect();

    c.bench_function("find_last_index_1024", |b| {
        b.iter(|| black_box(seq.find_last_index(|x| x % 100 == 0)));
    });
}

fn bench_flatten(c: &mut Criterion) {
    let rows: Vec<Vec<u32>> = (0..64).map(|i| (0..i).collect()).collect();
    let mixed: Vec<Nested<u32>> = (0..256)
        .map(|i| {
            if i % 2 == 0 {
                Nested::leaf(i)
            } else {
                Nested::seq(0..4)
            }
        })
        .collect();

    c.bench_function("flatten_vec_of_vecs", |b| {
        b.iter(|| black_box(rows.flatten::<u32>()));
    });

    c.bench_function("flatten_nested", |b| {
        b.iter(|| black_box(mixed.flatten::<u32>()));
    });
}

criterion_group!(
    benches,
    bench_set_ops,
    bench_frequencies,
    bench_find_last_index,
    bench_flatten
);
criterion_main!(benches);
