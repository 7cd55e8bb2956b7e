use std::cmp::Ordering;
use std::ops::Range;

use crate::data::{Hull, PointId, PointSet};
use crate::{Error, PolygonScalar};

// https://en.wikipedia.org/wiki/Quickhull

// Remaining stack below which a recursion step moves to a fresh segment.
const STACK_RED_ZONE: usize = 32 * 1024;
// Size of each freshly allocated stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

// Properties:
//    No panics for ids inside the point set.
//    Vertices wind clockwise, only the chord endpoints may be colinear with
//    their neighbours.
//    No points are outside the resulting hull.
/// $O(n \log n)$ expected, $O(n^2)$ worst case. Convex hull of a point set.
///
/// Recursive chord splitting: the points with the smallest and largest x form a
/// chord, the farthest point on either side of it becomes a vertex and the
/// points beyond the two new chords are processed the same way. Ties on x go to
/// the point that comes first.
///
/// # Errors
/// Will return an error iff the point set has fewer than two points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices are ids of the input set.
/// * Colinear input yields exactly its two extreme points.
///
/// # Examples
///
/// ```rust
/// # use convex_layers::algorithms::convex_hull;
/// # use convex_layers::data::{PointId, PointSet};
/// let points = PointSet::try_from(vec![(0., 0.), (10., 0.), (0., 10.)]).unwrap();
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.vertices(), &[PointId(0), PointId(2), PointId(1)]);
/// assert_eq!(hull.area(), 50.0);
/// ```
///
/// ```rust
/// # use convex_layers::algorithms::convex_hull;
/// # use convex_layers::data::PointSet;
/// # use convex_layers::Error;
/// let single = PointSet::try_from(vec![(1, 1)]).unwrap();
/// assert_eq!(convex_hull(&single).err(), Some(Error::InsufficientVertices));
/// ```
pub fn convex_hull<T>(points: &PointSet<T>) -> Result<Hull<T>, Error>
where
  T: PolygonScalar,
{
  let ids: Vec<PointId> = points.ids().collect();
  convex_hull_of(points, &ids)
}

/// Convex hull of the points named by `ids`.
///
/// Ties between extreme points and between equally distant points resolve to
/// the id that comes first in `ids`.
///
/// # Errors
/// Will return an error iff `ids` has fewer than two elements.
///
/// # Panics
/// Panics if an id is out of bounds for `points`.
pub fn convex_hull_of<T>(points: &PointSet<T>, ids: &[PointId]) -> Result<Hull<T>, Error>
where
  T: PolygonScalar,
{
  QuickHull::new(points).hull_of(ids)
}

/// Reusable hull computer for many subsets of one point set.
///
/// Candidate sets live as ranges in a single arena. Each recursion step
/// appends its two sub-partitions to the arena and truncates it again when
/// done, so the arena's allocation is shared by every hull computed.
#[derive(Debug)]
pub struct QuickHull<'a, T> {
  points: &'a PointSet<T>,
  arena: Vec<PointId>,
  boundary: Vec<PointId>,
}

impl<'a, T> QuickHull<'a, T>
where
  T: PolygonScalar,
{
  pub fn new(points: &'a PointSet<T>) -> QuickHull<'a, T> {
    QuickHull {
      points,
      arena: Vec::new(),
      boundary: Vec::new(),
    }
  }

  /// See [`convex_hull_of`].
  pub fn hull_of(&mut self, ids: &[PointId]) -> Result<Hull<T>, Error> {
    if ids.len() < 2 {
      return Err(Error::InsufficientVertices);
    }
    Ok(self.build(ids))
  }

  // Total over any input: an empty id list gives an empty hull.
  pub(crate) fn build(&mut self, ids: &[PointId]) -> Hull<T> {
    self.arena.clear();
    self.boundary.clear();
    let (near, far) = match self.chord(ids) {
      Some(chord) => chord,
      None => return Hull::new(Vec::new(), self.points),
    };
    log::trace!(
      "quickhull: chord {} -> {} over {} points",
      near.usize(),
      far.usize(),
      ids.len()
    );
    // Distinct points always have distinct extremes.
    if self.points[near].coincides(&self.points[far]) {
      return Hull::new(vec![near], self.points);
    }

    let p = self.points[near].array;
    let q = self.points[far].array;
    for &id in ids {
      if T::cmp_slope(&p, &q, &self.points[id]) == Ordering::Greater {
        self.arena.push(id);
      }
    }
    let left = 0..self.arena.len();
    for &id in ids {
      if T::cmp_slope(&p, &q, &self.points[id]) == Ordering::Less {
        self.arena.push(id);
      }
    }
    let right = left.end..self.arena.len();

    self.boundary.push(near);
    self.find_hull(left, near, far);
    self.boundary.push(far);
    self.find_hull(right, far, near);
    log::trace!(
      "quickhull: {} vertices, arena capacity {}",
      self.boundary.len(),
      self.arena.capacity()
    );
    Hull::new(std::mem::take(&mut self.boundary), self.points)
  }

  // Points with the smallest and largest x. First occurrence wins ties. When
  // every point has the same x the column is ordered by y instead, so that its
  // two ends form the chord.
  fn chord(&self, ids: &[PointId]) -> Option<(PointId, PointId)> {
    let (&first, rest) = ids.split_first()?;
    let x = |id: PointId| self.points[id].x_coord();
    let mut near = first;
    let mut far = first;
    for &id in rest {
      if x(id) < x(near) {
        near = id;
      }
      if x(id) > x(far) {
        far = id;
      }
    }
    if x(near) < x(far) {
      return Some((near, far));
    }
    for &id in rest {
      let pt = &self.points[id];
      if pt.cmp_xy(&self.points[near]) == Ordering::Less {
        near = id;
      }
      if pt.cmp_xy(&self.points[far]) == Ordering::Greater {
        far = id;
      }
    }
    Some((near, far))
  }

  // Appends, in order, the hull vertices strictly left of `from -> to`.
  // `candidates` is an arena range holding exactly the points strictly left of
  // that chord.
  fn find_hull(&mut self, candidates: Range<usize>, from: PointId, to: PointId) {
    if candidates.is_empty() {
      return;
    }
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
      self.split(candidates, from, to)
    })
  }

  fn split(&mut self, candidates: Range<usize>, from: PointId, to: PointId) {
    let p = self.points[from].array;
    let q = self.points[to].array;

    // Distances to the chord are compared as cross products, which scale the
    // distance by the length of the chord.
    let mut farthest: Option<PointId> = None;
    for &id in &self.arena[candidates.clone()] {
      let pt = &self.points[id];
      let is_farther = match farthest {
        Some(best) => T::cmp_side_dist(&p, &q, pt, &self.points[best]) == Ordering::Greater,
        None => T::cmp_slope(&p, &q, pt) == Ordering::Greater,
      };
      if is_farther {
        farthest = Some(id);
      }
    }
    let apex = match farthest {
      Some(apex) => apex,
      None => return,
    };
    let r = self.points[apex].array;

    let base = self.arena.len();
    for idx in candidates.clone() {
      let id = self.arena[idx];
      if T::cmp_slope(&p, &r, &self.points[id]) == Ordering::Greater {
        self.arena.push(id);
      }
    }
    let mid = self.arena.len();
    for idx in candidates {
      let id = self.arena[idx];
      if T::cmp_slope(&r, &q, &self.points[id]) == Ordering::Greater {
        self.arena.push(id);
      }
    }
    let end = self.arena.len();

    self.find_hull(base..mid, from, apex);
    self.boundary.push(apex);
    self.find_hull(mid..end, apex, to);
    self.arena.truncate(base);
  }
}
