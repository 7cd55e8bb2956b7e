use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use convex_layers::algorithms::{convex_hull, convex_layers};
use convex_layers::data::{Point, PointSet};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_points(n: usize, rng: &mut SmallRng) -> PointSet<f64> {
  let pts = (0..n)
    .map(|_| {
      let pt: Point<f64> = rng.gen();
      pt.cast(|v| v * 1000.0)
    })
    .collect();
  PointSet::new(pts).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  for &n in &[50, 100, 1_000, 5_000] {
    c.bench_function(&format!("convex_hull({})", n), |b| {
      b.iter_batched(
        || random_points(n, &mut rng),
        |points| convex_hull(&points),
        BatchSize::LargeInput,
      )
    });
    c.bench_function(&format!("convex_layers({})", n), |b| {
      b.iter_batched(
        || random_points(n, &mut rng),
        |points| convex_layers(&points),
        BatchSize::LargeInput,
      )
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
