use balloon::{Balloon, BalloonParams, HASH_SIZE, MIN_DELTA, compute_hash};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_space_cost(c: &mut Criterion) {
    let mut g = c.benchmark_group("balloon space_cost");

    for space_cost in [64u32, 1024, 16 * 1024] {
        let balloon = Balloon::new(BalloonParams::new(space_cost, 3)).unwrap();
        g.throughput(Throughput::Bytes(u64::from(space_cost) * HASH_SIZE as u64));
        g.bench_function(format!("{space_cost} blocks, 3 rounds"), |b| {
            b.iter(|| balloon.hash(black_box(b"hunter42"), black_box(b"examplesalt")))
        });
    }

    g.finish();
}

pub fn bench_delta(c: &mut Criterion) {
    let mut g = c.benchmark_group("balloon delta");

    for delta in [MIN_DELTA, 5, 8] {
        g.bench_function(format!("delta {delta}"), |b| {
            let mut out = [0u8; HASH_SIZE];
            b.iter(|| compute_hash(&mut out, black_box(b"hunter42"), b"examplesalt", 1024, 1, delta))
        });
    }

    g.finish();
}

criterion_group!(benches, bench_space_cost, bench_delta);
criterion_main!(benches);
