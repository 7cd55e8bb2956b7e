use std::ops::Index;

use crate::data::{Hull, PointId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKind {
  Polygon,
  Segment,
  Singleton,
}

/// Points removed by one peeling step.
///
/// The boundary describes the shape: a hull with at least three vertices, the
/// two ends of a segment or a single point. `coincident` holds the other points
/// removed in the same step: points whose coordinates equal one of the boundary
/// points. It is empty unless the input has duplicate coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer<T> {
  Polygon {
    hull: Hull<T>,
    coincident: Vec<PointId>,
  },
  Segment {
    ends: [PointId; 2],
    coincident: Vec<PointId>,
  },
  Singleton {
    point: PointId,
    coincident: Vec<PointId>,
  },
}

impl<T> Layer<T> {
  pub fn kind(&self) -> LayerKind {
    match self {
      Layer::Polygon { .. } => LayerKind::Polygon,
      Layer::Segment { .. } => LayerKind::Segment,
      Layer::Singleton { .. } => LayerKind::Singleton,
    }
  }

  /// Boundary points in order. Clockwise for polygons.
  pub fn boundary(&self) -> &[PointId] {
    match self {
      Layer::Polygon { hull, .. } => hull.vertices.as_slice(),
      Layer::Segment { ends, .. } => &ends[..],
      Layer::Singleton { point, .. } => std::slice::from_ref(point),
    }
  }

  pub fn coincident(&self) -> &[PointId] {
    match self {
      Layer::Polygon { coincident, .. }
      | Layer::Segment { coincident, .. }
      | Layer::Singleton { coincident, .. } => coincident,
    }
  }

  /// Every point removed in this step: the boundary followed by the coincident
  /// points.
  pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
    self
      .boundary()
      .iter()
      .chain(self.coincident())
      .copied()
  }

  pub fn len(&self) -> usize {
    self.boundary().len() + self.coincident().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn hull(&self) -> Option<&Hull<T>> {
    match self {
      Layer::Polygon { hull, .. } => Some(hull),
      _ => None,
    }
  }

  pub fn is_polygon(&self) -> bool {
    self.kind() == LayerKind::Polygon
  }
}

/// Convex layers from the outside in.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSequence<T> {
  layers: Vec<Layer<T>>,
}

impl<T> LayerSequence<T> {
  pub fn len(&self) -> usize {
    self.layers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.layers.is_empty()
  }

  pub fn layers(&self) -> &[Layer<T>] {
    &self.layers
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Layer<T>> {
    self.layers.iter()
  }

  pub fn into_layers(self) -> Vec<Layer<T>> {
    self.layers
  }

  /// Total number of points over all layers.
  pub fn point_count(&self) -> usize {
    self.layers.iter().map(Layer::len).sum()
  }

  /// For each point id, the index of the layer holding it. `None` for ids no
  /// layer holds.
  pub fn depths(&self, n: usize) -> Vec<Option<usize>> {
    let mut depths = vec![None; n];
    for (depth, layer) in self.layers.iter().enumerate() {
      for id in layer.point_ids() {
        depths[id.usize()] = Some(depth);
      }
    }
    depths
  }
}

impl<T> FromIterator<Layer<T>> for LayerSequence<T> {
  fn from_iter<I: IntoIterator<Item = Layer<T>>>(iter: I) -> Self {
    LayerSequence {
      layers: iter.into_iter().collect(),
    }
  }
}

impl<T> Index<usize> for LayerSequence<T> {
  type Output = Layer<T>;
  fn index(&self, idx: usize) -> &Layer<T> {
    &self.layers[idx]
  }
}

impl<T> IntoIterator for LayerSequence<T> {
  type Item = Layer<T>;
  type IntoIter = std::vec::IntoIter<Layer<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.layers.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a LayerSequence<T> {
  type Item = &'a Layer<T>;
  type IntoIter = std::slice::Iter<'a, Layer<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.layers.iter()
  }
}
