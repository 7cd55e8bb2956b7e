mod hull;
mod layer;
pub(crate) mod point;
mod point_set;

pub use hull::{DirectedIndexEdge, Hull};
pub use layer::{Layer, LayerKind, LayerSequence};
pub use point::Point;
pub use point_set::{PointId, PointSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
