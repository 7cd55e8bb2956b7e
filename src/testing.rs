// This module contains strategies and fixtures for:
//  * points
//  * point sets (general, colinear, grids)
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PointSet};

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Small coordinates keep every cross product exact, for integers and floats
// alike, and make colinear and coincident points common.
const COORD: Range<i64> = -32..32;

pub fn any_i64() -> impl Strategy<Value = Point<i64>> {
  (COORD, COORD).prop_map(Point::from)
}

pub fn point_set_i64(size: Range<usize>) -> impl Strategy<Value = PointSet<i64>> {
  vec(any_i64(), size).prop_map(|pts| PointSet::new(pts).expect("integer points are finite"))
}

/// Same distribution as [`point_set_i64`], cast to `f64`.
pub fn point_set_f64(size: Range<usize>) -> impl Strategy<Value = PointSet<f64>> {
  point_set_i64(size).prop_map(|set| {
    let pts = set
      .into_points()
      .into_iter()
      .map(|pt| pt.cast(|v| v as f64))
      .collect();
    PointSet::new(pts).expect("small floats are finite")
  })
}

/// Points `origin + k * dir` for small `k`, in random order. Duplicates are
/// likely.
pub fn colinear_point_set(size: Range<usize>) -> impl Strategy<Value = PointSet<i64>> {
  let dir = (-4i64..=4, -4i64..=4).prop_filter("direction must be non-zero", |d| *d != (0, 0));
  (any_i64(), dir, vec(-8i64..=8, size)).prop_map(|(origin, (dx, dy), ks)| {
    let pts = ks
      .into_iter()
      .map(|k| Point::new([origin.array[0] + k * dx, origin.array[1] + k * dy]))
      .collect();
    PointSet::new(pts).expect("integer points are finite")
  })
}

/// `n * n` lattice points, row by row: id `y * n + x` is the point `(x, y)`.
pub fn grid(n: i64) -> PointSet<i64> {
  let pts = (0..n)
    .flat_map(|y| (0..n).map(move |x| Point::new([x, y])))
    .collect();
  PointSet::new(pts).expect("integer points are finite")
}

/// `n` points on a horizontal line, 10 units apart.
pub fn colinear(n: i64) -> PointSet<i64> {
  let pts = (0..n).map(|i| Point::new([i * 10, 500])).collect();
  PointSet::new(pts).expect("integer points are finite")
}

/// `n` points uniformly distributed in `[0, 1000)^2`.
pub fn random_f64(n: usize, seed: u64) -> PointSet<f64> {
  let mut rng = SmallRng::seed_from_u64(seed);
  let pts = (0..n)
    .map(|_| {
      let pt: Point<f64> = rng.gen();
      pt.cast(|v| v * 1000.0)
    })
    .collect();
  PointSet::new(pts).expect("sampled points are finite")
}
