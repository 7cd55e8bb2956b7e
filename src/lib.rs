// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex layers ("onion peeling") of planar point sets.
//!
//! The hull of a [`PointSet`](data::PointSet) is computed with a recursive
//! chord-splitting algorithm ([`algorithms::convex_hull()`]). Peeling repeatedly
//! removes that hull from the points that are left until nothing remains
//! ([`algorithms::convex_layers()`]).
//!
//! ```rust
//! # use convex_layers::algorithms::convex_layers;
//! # use convex_layers::data::{LayerKind, Point, PointSet};
//! let points = PointSet::new(vec![
//!   Point::new([0, 0]),
//!   Point::new([10, 0]),
//!   Point::new([10, 10]),
//!   Point::new([0, 10]),
//!   Point::new([5, 5]),
//! ])
//! .unwrap();
//! let layers = convex_layers(&points);
//! assert_eq!(layers.len(), 2);
//! assert_eq!(layers[0].kind(), LayerKind::Polygon);
//! assert_eq!(layers[1].kind(), LayerKind::Singleton);
//! ```
use num_traits::*;
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::ops::*;

pub mod algorithms;
pub mod data;
mod orientation;
#[cfg(test)]
pub mod testing;

pub use orientation::Orientation;

use data::PointId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// The coordinate of the given point is NaN or infinite.
  InvalidCoordinate(PointId),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::InvalidCoordinate(id) => {
        write!(f, "Point {} has a NaN or infinite coordinate", id.usize())
      }
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type of a [`Point`](data::Point).
///
/// Side tests compare cross products without a tolerance. Fixed-precision
/// types never overflow: differences are taken as unsigned magnitudes and
/// multiplied in a type twice as wide. Floating point types compute the plain
/// cross product and classify by whatever sign the rounded value has.
pub trait PolygonScalar: std::fmt::Debug + Copy + PartialOrd + Zero + NumOps<Self, Self> {
  fn from_constant(val: i8) -> Self;

  /// Integers are always finite.
  fn is_finite(&self) -> bool;

  /// Nearest `f64`. Used for areas, which may not fit in `Self`.
  fn to_float(&self) -> f64;

  /// Compare how far `r` and `s` lie to the left of the directed line
  /// `p -> q`, measured in multiples of the length of `pq`. `Greater` when `r`
  /// is farther left than `s`.
  fn cmp_side_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2], s: &[Self; 2]) -> Ordering;

  /// Sign of the cross product `(q - p) x (r - p)`: `Greater` when `r` lies to
  /// the left of the directed line `p -> q`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    Self::cmp_side_dist(p, q, r, p)
  }
}

// Twice the signed area of the triangle `p`, `q`, `r`.
fn cross_product<T>(p: &[T; 2], q: &[T; 2], r: &[T; 2]) -> T
where
  T: Copy + NumOps<T, T>,
{
  (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0])
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl PolygonScalar for $ty {
      fn from_constant(val: i8) -> Self {
        <$ty as From<i8>>::from(val)
      }
      fn is_finite(&self) -> bool {
        true
      }
      fn to_float(&self) -> f64 {
        AsPrimitive::<f64>::as_(*self)
      }
      fn cmp_side_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2], s: &[Self; 2]) -> Ordering {
        // Absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(a, b) = (c, sign) where a = if sign { b - c } else { b + c }
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        // Sign of (q - p) x (r - s) = cross(p, q, r) - cross(p, q, s).
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], s[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], s[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty as From<i8>>::from(val)
        }
        fn is_finite(&self) -> bool {
          <$ty>::is_finite(*self)
        }
        fn to_float(&self) -> f64 {
          <f64 as From<$ty>>::from(*self)
        }
        fn cmp_side_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2], s: &[Self; 2]) -> Ordering {
          let r_dist = cross_product(p, q, r);
          let s_dist = cross_product(p, q, s);
          r_dist.partial_cmp(&s_dist).unwrap_or(Ordering::Equal)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }
        fn is_finite(&self) -> bool {
          self.into_inner().is_finite()
        }
        fn to_float(&self) -> f64 {
          <f64 as From<_>>::from(self.into_inner())
        }
        fn cmp_side_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2], s: &[Self; 2]) -> Ordering {
          let r_dist = cross_product(p, q, r);
          let s_dist = cross_product(p, q, s);
          r_dist.partial_cmp(&s_dist).unwrap_or(Ordering::Equal)
        }
      }
    )*
  };
}

fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
floating_precision!(f32, f64);
wrapped_floating_precision!(
  OrderedFloat<f32>,
  OrderedFloat<f64>,
  NotNan<f32>,
  NotNan<f64>
);
