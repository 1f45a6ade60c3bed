//! Heap operation benchmarks
//!
//! Measures the core operations over reproducible random inputs. A seeded
//! LCG is used instead of a random seed so runs are comparable across
//! machines and revisions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pairing_tree::PairingTree;

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_i32(&mut self, bound: i32) -> i32 {
        ((self.next() >> 33) % bound as u64) as i32
    }
}

fn random_values(count: usize, seed: u64) -> Vec<i32> {
    let mut rng = Lcg::new(seed);
    (0..count).map(|_| rng.next_i32(1_000_000)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [1_000, 10_000, 100_000] {
        let values = random_values(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut heap = PairingTree::new();
                for &value in values {
                    heap.insert(black_box(value));
                }
                heap
            });
        });
    }
    group.finish();
}

fn bench_insert_delete_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_delete_min");
    for size in [1_000, 10_000, 100_000] {
        let values = random_values(size, 43);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut heap = PairingTree::new();
                for &value in values {
                    heap.insert(value);
                }
                let mut sum = 0i64;
                while let Some(value) = heap.delete_min() {
                    sum += value as i64;
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");
    for size in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = PairingTree::new();
                let mut rng = Lcg::new(44);
                for _ in 0..size {
                    match rng.next() % 4 {
                        0 | 1 => {
                            heap.insert(rng.next_i32(1_000));
                        }
                        2 => {
                            heap.delete_min();
                        }
                        _ => {
                            let old = rng.next_i32(1_000);
                            let new = rng.next_i32(1_000);
                            heap.adjust(&old, new);
                        }
                    }
                }
                black_box(heap)
            });
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for size in [1_000, 10_000] {
        let values = random_values(size, 45);
        let mut heap = PairingTree::new();
        for &value in &values {
            heap.insert(value);
        }
        let probe = values[values.len() / 2];
        group.bench_with_input(BenchmarkId::from_parameter(size), &heap, |b, heap| {
            b.iter(|| black_box(heap.find(black_box(&probe))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_insert_delete_min,
    bench_mixed_workload,
    bench_find
);
criterion_main!(benches);
