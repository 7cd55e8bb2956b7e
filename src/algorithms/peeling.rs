use std::iter::FusedIterator;

use crate::algorithms::convex_hull::quickhull::QuickHull;
use crate::data::{Layer, LayerSequence, PointId, PointSet};
use crate::PolygonScalar;

// https://en.wikipedia.org/wiki/Convex_layers

/// Peeling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerOptions {
  /// Emit the one or two points left over after the last hull as a final
  /// `Singleton` or `Segment` layer. When `false` they are dropped and the
  /// layers no longer cover every input point.
  pub keep_remainder: bool,
}

impl Default for LayerOptions {
  fn default() -> Self {
    LayerOptions {
      keep_remainder: true,
    }
  }
}

/// $O(n^2)$ worst case. Convex layers of a point set.
///
/// Peels the convex hull off the remaining points until none are left. Every
/// input point ends up in exactly one layer; see [`LayerPeeler`] for the rules.
///
/// # Examples
///
/// ```rust
/// # use convex_layers::algorithms::convex_layers;
/// # use convex_layers::data::{LayerKind, PointId, PointSet};
/// let colinear = PointSet::try_from(vec![(0, 0), (1, 0), (2, 0), (3, 0)]).unwrap();
/// let layers = convex_layers(&colinear);
/// assert_eq!(layers.len(), 2);
/// assert_eq!(layers[0].kind(), LayerKind::Segment);
/// assert_eq!(layers[0].boundary(), &[PointId(0), PointId(3)]);
/// assert_eq!(layers[1].boundary(), &[PointId(1), PointId(2)]);
/// ```
pub fn convex_layers<T>(points: &PointSet<T>) -> LayerSequence<T>
where
  T: PolygonScalar,
{
  convex_layers_with(points, LayerOptions::default())
}

pub fn convex_layers_with<T>(points: &PointSet<T>, options: LayerOptions) -> LayerSequence<T>
where
  T: PolygonScalar,
{
  let layers: LayerSequence<T> = LayerPeeler::with_options(points, options).collect();
  log::debug!(
    "convex layers: {} points in {} layers",
    points.len(),
    layers.len()
  );
  layers
}

/// Lazily peels convex layers, one per call to `next`.
///
/// With `R` the points not yet assigned to a layer:
/// * `|R| >= 3`: the hull of `R` becomes a `Polygon`, `Segment` or `Singleton`
///   layer depending on how many vertices it has. The hull vertices and every
///   point of `R` sharing coordinates with one of them leave `R`.
/// * `|R| = 2`: both points form a final `Segment`.
/// * `|R| = 1`: the point forms a final `Singleton`.
/// * `|R| = 0`: done.
///
/// Each step removes at least two points unless it is the last one, so there
/// are at most $\lceil n/2 \rceil + 1$ layers. Colinear input reaches that
/// bound: every hull is the pair of outermost points.
#[derive(Debug)]
pub struct LayerPeeler<'a, T> {
  points: &'a PointSet<T>,
  quickhull: QuickHull<'a, T>,
  // Ascending, so ties in the hull computation go to the lowest id.
  remaining: Vec<PointId>,
  peeled: Vec<bool>,
  options: LayerOptions,
  depth: usize,
}

impl<'a, T> LayerPeeler<'a, T>
where
  T: PolygonScalar,
{
  pub fn new(points: &'a PointSet<T>) -> LayerPeeler<'a, T> {
    LayerPeeler::with_options(points, LayerOptions::default())
  }

  pub fn with_options(points: &'a PointSet<T>, options: LayerOptions) -> LayerPeeler<'a, T> {
    LayerPeeler {
      points,
      quickhull: QuickHull::new(points),
      remaining: points.ids().collect(),
      peeled: vec![false; points.len()],
      options,
      depth: 0,
    }
  }

  /// Number of points not yet assigned to a layer.
  pub fn remaining(&self) -> usize {
    self.remaining.len()
  }

  fn peel(&mut self) -> Option<Layer<T>> {
    if self.remaining.len() >= 3 {
      return self.peel_hull();
    }
    let remainder = std::mem::take(&mut self.remaining);
    let layer = match *remainder {
      [point] => Layer::Singleton {
        point,
        coincident: Vec::new(),
      },
      [a, b] => Layer::Segment {
        ends: [a, b],
        coincident: Vec::new(),
      },
      _ => return None,
    };
    self.options.keep_remainder.then_some(layer)
  }

  fn peel_hull(&mut self) -> Option<Layer<T>> {
    let hull = self.quickhull.build(&self.remaining);
    for &id in hull.vertices() {
      self.peeled[id.usize()] = true;
    }
    let coincident = self.collect_coincident(hull.vertices());
    for &id in &coincident {
      self.peeled[id.usize()] = true;
    }
    let peeled = &self.peeled;
    self.remaining.retain(|id| !peeled[id.usize()]);

    let layer = match hull.len() {
      0 => {
        self.remaining.clear();
        return None;
      }
      1 => Layer::Singleton {
        point: hull.vertices[0],
        coincident,
      },
      2 => Layer::Segment {
        ends: [hull.vertices[0], hull.vertices[1]],
        coincident,
      },
      _ => Layer::Polygon { hull, coincident },
    };
    Some(layer)
  }

  // Unpeeled points with the same coordinates as a boundary point, in id order.
  fn collect_coincident(&self, boundary: &[PointId]) -> Vec<PointId> {
    let points = self.points;
    let mut sorted: Vec<PointId> = boundary.to_vec();
    sorted.sort_by(|a, b| points[*a].cmp_xy(&points[*b]));
    self
      .remaining
      .iter()
      .copied()
      .filter(|id| !self.peeled[id.usize()])
      .filter(|id| {
        sorted
          .binary_search_by(|v| points[*v].cmp_xy(&points[*id]))
          .is_ok()
      })
      .collect()
  }
}

impl<'a, T> Iterator for LayerPeeler<'a, T>
where
  T: PolygonScalar,
{
  type Item = Layer<T>;

  fn next(&mut self) -> Option<Layer<T>> {
    let before = self.remaining.len();
    let layer = self.peel()?;
    log::debug!(
      "layer {}: {:?} with {} points, {} of {} remaining",
      self.depth,
      layer.kind(),
      layer.len(),
      self.remaining.len(),
      before
    );
    self.depth += 1;
    Some(layer)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.remaining.len();
    let lower = match n {
      0 => 0,
      1 | 2 => usize::from(self.options.keep_remainder),
      _ => 1,
    };
    let upper = if n == 0 { 0 } else { (n + 1) / 2 + 1 };
    (lower, Some(upper))
  }
}

impl<'a, T> FusedIterator for LayerPeeler<'a, T> where T: PolygonScalar {}
