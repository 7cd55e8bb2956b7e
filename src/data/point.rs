use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::{Orientation, PolygonScalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  /// False if any coordinate is NaN or infinite.
  pub fn is_finite(&self) -> bool
  where
    T: PolygonScalar,
  {
    self.array.iter().all(PolygonScalar::is_finite)
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T, 2> {
  fn from(array: [T; 2]) -> Point<T, 2> {
    Point { array }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Turn taken when walking from `self` to `q` to `r`.
  pub fn orient(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Lexicographic `(x, y)` comparison. NaN compares equal to everything, which
  /// cannot happen for points owned by a [`PointSet`](super::PointSet).
  pub fn cmp_xy(&self, other: &Point<T, 2>) -> Ordering
  where
    T: PolygonScalar,
  {
    let cmp = |a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal);
    cmp(self.x_coord(), other.x_coord()).then_with(|| cmp(self.y_coord(), other.y_coord()))
  }

  /// Numeric equality of both coordinates. `-0.0` and `0.0` coincide.
  pub fn coincides(&self, other: &Point<T, 2>) -> bool
  where
    T: PolygonScalar,
  {
    self.x_coord() == other.x_coord() && self.y_coord() == other.y_coord()
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}
