use balloon::{Balloon, BalloonM, BalloonParams};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Lanes run on the rayon pool, so wall time should grow slower than the
/// lane count up to the number of cores.
pub fn bench_parallelism(c: &mut Criterion) {
    let mut g = c.benchmark_group("balloon_m parallelism");

    let single = Balloon::new(BalloonParams::new(1024, 3)).unwrap();
    g.bench_function("sequential baseline", |b| {
        b.iter(|| single.hash(black_box(b"hunter42"), black_box(b"examplesalt")))
    });

    for lanes in [1u32, 2, 4, 8] {
        let hasher = BalloonM::new(BalloonParams::new(1024, 3).with_parallelism(lanes)).unwrap();
        g.bench_function(format!("{lanes} lanes"), |b| {
            b.iter(|| hasher.hash(black_box(b"hunter42"), black_box(b"examplesalt")))
        });
    }

    g.finish();
}

criterion_group!(benches, bench_parallelism);
criterion_main!(benches);
