//! # Array Benchmark
//!
//! Measures the amortized append cost, front insertion shifting and
//! grid fills.
//!
//! Run with: `cargo bench --package slotarray_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slotarray_core::{DynamicArray, FixedArray, Grid2D};

/// Benchmark: append N values, crossing every doubling boundary.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_append");

    for count in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for v in 0..count {
                    array.append(black_box(v));
                }
                array.capacity()
            });
        });
    }

    group.finish();
}

/// Benchmark: insert at index 0, shifting every live element.
fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("dynamic_insert_front_1000", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for v in 0..1_000u32 {
                black_box(array.insert(0, black_box(v))).expect("insert at 0 is always valid");
            }
            array.len()
        });
    });
}

/// Benchmark: remove from the front until empty.
fn bench_remove_front(c: &mut Criterion) {
    c.bench_function("dynamic_remove_front_1000", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for v in 0..1_000u32 {
                array.append(v);
            }
            for v in 0..1_000u32 {
                black_box(array.remove(black_box(&v))).expect("value was appended above");
            }
            array.capacity()
        });
    });
}

/// Benchmark: construct and clear a 256x256 grid.
fn bench_grid_clear(c: &mut Criterion) {
    c.bench_function("grid_new_clear_256x256", |b| {
        b.iter(|| {
            let mut grid = Grid2D::new(256, 256, 0u32).ok()?;
            grid.clear(black_box(1));
            Some(grid.num_cols())
        });
    });
}

/// Benchmark: walk a fixed array through its iterator.
fn bench_fixed_iter(c: &mut Criterion) {
    let Ok(array) = FixedArray::from_fn(100_000, |i| i as u64) else {
        return;
    };
    c.bench_function("fixed_iter_sum_100000", |b| {
        b.iter(|| black_box(&array).iter().sum::<u64>());
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_insert_front,
    bench_remove_front,
    bench_grid_clear,
    bench_fixed_iter,
);
criterion_main!(benches);
