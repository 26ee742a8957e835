use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

use lincomb::VectorSet;

fn xrng() -> impl Rng {
    <Xoshiro256PlusPlus as SeedableRng>::seed_from_u64(thread_rng().next_u64())
}

fn random_set(rng: &mut impl Rng, k: usize, d: usize) -> VectorSet<f64> {
    let rows = (0..k)
        .map(|_| (0..d).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    VectorSet::new(rows).expect("generated rows share one dimension")
}

/// SVD-based rank over growing set shapes.
fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("span/rank");
    group.throughput(Throughput::Elements(1));

    let mut rng = xrng();
    for &(d, k) in &[(2, 2), (3, 6), (8, 8), (16, 32)] {
        let set = random_set(&mut rng, k, d);
        group.bench_with_input(
            BenchmarkId::new("svd", format!("{d}x{k}")),
            &set,
            |b, set| b.iter(|| black_box(black_box(set).rank().unwrap())),
        );
    }
    group.finish();
}

/// Kahan-compensated weighted sum.
fn bench_combine(c: &mut Criterion) {
    let mut rng = xrng();
    let set = random_set(&mut rng, 6, 3);
    let coefficients: Vec<f64> = (0..6).map(|_| rng.gen_range(-2.0..2.0)).collect();

    c.bench_function("combine/6x3", |b| {
        b.iter(|| black_box(black_box(&set).combine(black_box(&coefficients))))
    });
}

criterion_group!(benches, bench_rank, bench_combine);
criterion_main!(benches);
