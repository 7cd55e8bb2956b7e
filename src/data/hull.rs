use std::marker::PhantomData;

use crate::data::{Point, PointId, PointLocation, PointSet};
use crate::{Orientation, PolygonScalar};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedIndexEdge {
  pub src: PointId,
  pub dst: PointId,
}

/// Convex hull of a subset of a [`PointSet`].
///
/// Vertices are ids into the point set they were computed from, ordered
/// clockwise. The polygon is convex and only the two chord endpoints may lie
/// on the segment between their neighbours: an endpoint is the first point with
/// extreme x, which need not be a corner of its column. Two degenerate shapes
/// exist: two vertices when every input point is colinear, and a single vertex
/// when every input point has the same coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T> {
  pub(crate) vertices: Vec<PointId>,
  pub(crate) signed_area_2x: f64,
  pub(crate) scalar: PhantomData<T>,
}

impl<T: PolygonScalar> Hull<T> {
  pub(crate) fn new(vertices: Vec<PointId>, points: &PointSet<T>) -> Hull<T> {
    let signed_area_2x = shoelace(&vertices, points);
    Hull {
      vertices,
      signed_area_2x,
      scalar: PhantomData,
    }
  }

  pub fn vertices(&self) -> &[PointId] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn contains(&self, id: PointId) -> bool {
    self.vertices.contains(&id)
  }

  /// Each vertex paired with its successor, wrapping around at the end.
  pub fn edges(&self) -> impl ExactSizeIterator<Item = DirectedIndexEdge> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| DirectedIndexEdge {
      src: self.vertices[i],
      dst: self.vertices[(i + 1) % n],
    })
  }

  /// Twice the shoelace sum, in `f64` since the area of a hull with
  /// fixed-precision coordinates need not fit in `T`. Never positive since
  /// the vertices wind clockwise.
  pub fn signed_area_2x(&self) -> f64 {
    self.signed_area_2x
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x / 2.0
  }

  /// Enclosed area. Zero for the degenerate two and one vertex hulls.
  pub fn area(&self) -> f64 {
    self.signed_area().abs()
  }

  /// Vertex coordinates in boundary order.
  pub fn points<'a>(
    &'a self,
    points: &'a PointSet<T>,
  ) -> impl ExactSizeIterator<Item = &'a Point<T, 2>> + 'a {
    self.vertices.iter().map(move |&id| points.point(id))
  }

  /// $O(n)$ Locate `pt` relative to the hull. `points` must be the set the hull
  /// was computed from.
  pub fn locate(&self, points: &PointSet<T>, pt: &Point<T, 2>) -> PointLocation {
    match *self.vertices {
      [] => PointLocation::Outside,
      [a] => {
        if points.point(a).coincides(pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => locate_on_segment(points.point(a), points.point(b), pt),
      _ => {
        let mut on_edge = false;
        for edge in self.edges() {
          match points.point(edge.src).orient(points.point(edge.dst), pt) {
            Orientation::CounterClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::ClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

fn locate_on_segment<T>(a: &Point<T, 2>, b: &Point<T, 2>, pt: &Point<T, 2>) -> PointLocation
where
  T: PolygonScalar,
{
  let within = |lo: &T, hi: &T, v: &T| (lo <= v && v <= hi) || (hi <= v && v <= lo);
  if a.orient(b, pt).is_colinear()
    && within(a.x_coord(), b.x_coord(), pt.x_coord())
    && within(a.y_coord(), b.y_coord(), pt.y_coord())
  {
    PointLocation::OnBoundary
  } else {
    PointLocation::Outside
  }
}

fn shoelace<T: PolygonScalar>(vertices: &[PointId], points: &PointSet<T>) -> f64 {
  let n = vertices.len();
  (0..n)
    .map(|i| {
      let p = points.point(vertices[i]);
      let q = points.point(vertices[(i + 1) % n]);
      p.x_coord().to_float() * q.y_coord().to_float()
        - q.x_coord().to_float() * p.y_coord().to_float()
    })
    .sum()
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  fn square() -> PointSet<i64> {
    PointSet::try_from(vec![(0, 0), (0, 4), (4, 4), (4, 0), (2, 2), (9, 9)]).unwrap()
  }

  fn clockwise_square(points: &PointSet<i64>) -> Hull<i64> {
    Hull::new(vec![PointId(0), PointId(1), PointId(2), PointId(3)], points)
  }

  #[test]
  fn area_of_clockwise_square() {
    let points = square();
    let hull = clockwise_square(&points);
    assert_eq!(hull.signed_area_2x(), -32.0);
    assert_eq!(hull.signed_area(), -16.0);
    assert_eq!(hull.area(), 16.0);
  }

  #[test]
  fn edges_wrap_around() {
    let points = square();
    let hull = clockwise_square(&points);
    let edges: Vec<_> = hull.edges().map(|e| (e.src.usize(), e.dst.usize())).collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
  }

  #[test]
  fn locate_in_square() {
    let points = square();
    let hull = clockwise_square(&points);
    assert_eq!(hull.locate(&points, &Point::new([2, 2])), PointLocation::Inside);
    assert_eq!(hull.locate(&points, &Point::new([0, 2])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&points, &Point::new([4, 4])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&points, &Point::new([9, 9])), PointLocation::Outside);
    assert_eq!(hull.locate(&points, &Point::new([5, 2])), PointLocation::Outside);
  }

  #[test]
  fn locate_on_degenerate_hulls() {
    let points = square();
    let segment = Hull::new(vec![PointId(0), PointId(2)], &points);
    assert_eq!(segment.area(), 0.0);
    assert_eq!(segment.locate(&points, &Point::new([2, 2])), PointLocation::OnBoundary);
    assert_eq!(segment.locate(&points, &Point::new([5, 5])), PointLocation::Outside);
    assert_eq!(segment.locate(&points, &Point::new([1, 2])), PointLocation::Outside);

    let single = Hull::new(vec![PointId(5)], &points);
    assert_eq!(single.edges().count(), 1);
    assert_eq!(single.locate(&points, &Point::new([9, 9])), PointLocation::OnBoundary);
    assert_eq!(single.locate(&points, &Point::new([2, 2])), PointLocation::Outside);
  }

  #[test]
  fn membership_and_coordinates() {
    let points = square();
    let hull = clockwise_square(&points);
    assert!(hull.contains(PointId(2)));
    assert!(!hull.contains(PointId(4)));
    let corners: Vec<[i64; 2]> = hull.points(&points).map(|pt| pt.array).collect();
    assert_eq!(corners, vec![[0, 0], [0, 4], [4, 4], [4, 0]]);
    assert_eq!(hull.points(&points).len(), hull.len());
  }
}
