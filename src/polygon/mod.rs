pub mod polygon_boundary;
pub mod polygon_cache;

pub use polygon_boundary::*;
pub use polygon_cache::*;

use nalgebra::Point2;

use crate::misc::FloatingPoint;

/// Trait for determining if a point is inside a region.
pub trait Contains<T: FloatingPoint> {
    type Option;
    fn contains(&self, point: &Point2<T>, option: Self::Option) -> bool;
}
