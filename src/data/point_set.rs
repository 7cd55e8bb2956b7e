use std::ops::Index;

use crate::data::Point;
use crate::{Error, PolygonScalar};

/// Index of a point in its [`PointSet`]. Points are identified by position, not
/// by value: two ids may name points with equal coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

impl PointId {
  pub const fn usize(self) -> usize {
    self.0
  }
}

impl From<PointId> for usize {
  fn from(id: PointId) -> usize {
    id.0
  }
}

/// Ordered, immutable collection of points with finite coordinates.
///
/// Duplicate coordinates and colinear subsets are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
  points: Vec<Point<T, 2>>,
}

impl<T> PointSet<T> {
  /// # Errors
  /// Returns [`Error::InvalidCoordinate`] for the first point with a NaN or
  /// infinite coordinate.
  ///
  /// ```rust
  /// # use convex_layers::data::{Point, PointId, PointSet};
  /// # use convex_layers::Error;
  /// let pts = vec![Point::new([0.0, 1.0]), Point::new([f64::NAN, 0.0])];
  /// assert_eq!(
  ///   PointSet::new(pts).err(),
  ///   Some(Error::InvalidCoordinate(PointId(1))))
  /// ```
  pub fn new(points: Vec<Point<T, 2>>) -> Result<PointSet<T>, Error>
  where
    T: PolygonScalar,
  {
    if let Some(idx) = points.iter().position(|pt| !pt.is_finite()) {
      return Err(Error::InvalidCoordinate(PointId(idx)));
    }
    Ok(PointSet { points })
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, id: PointId) -> &Point<T, 2> {
    &self.points[id.0]
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  /// All ids in input order.
  pub fn ids(&self) -> impl ExactSizeIterator<Item = PointId> + DoubleEndedIterator {
    (0..self.points.len()).map(PointId)
  }

  pub fn iter(&self) -> impl ExactSizeIterator<Item = (PointId, &Point<T, 2>)> {
    self
      .points
      .iter()
      .enumerate()
      .map(|(idx, pt)| (PointId(idx), pt))
  }

  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.points
  }
}

impl<T> Index<PointId> for PointSet<T> {
  type Output = Point<T, 2>;
  fn index(&self, id: PointId) -> &Point<T, 2> {
    self.point(id)
  }
}

impl<T: PolygonScalar> TryFrom<Vec<Point<T, 2>>> for PointSet<T> {
  type Error = Error;
  fn try_from(points: Vec<Point<T, 2>>) -> Result<PointSet<T>, Error> {
    PointSet::new(points)
  }
}

impl<T: PolygonScalar> TryFrom<Vec<(T, T)>> for PointSet<T> {
  type Error = Error;
  fn try_from(points: Vec<(T, T)>) -> Result<PointSet<T>, Error> {
    PointSet::new(points.into_iter().map(Point::from).collect())
  }
}

impl<T> Default for PointSet<T> {
  fn default() -> Self {
    PointSet { points: Vec::new() }
  }
}
