pub mod convex_hull;
pub mod peeling;

#[doc(inline)]
pub use convex_hull::quickhull::{convex_hull, convex_hull_of, QuickHull};

#[doc(inline)]
pub use peeling::{convex_layers, convex_layers_with, LayerOptions, LayerPeeler};
