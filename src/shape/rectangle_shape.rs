use anyhow::ensure;
use nalgebra::{Point2, Vector2};

use crate::{
    chain::SegmentChain,
    misc::FloatingPoint,
    segment::{BoundarySegment, HalfPlaneSense},
};

use super::{place, BoundaryShape, ShapeKind};

/// Rectangle centered in normalized (U, W) space, rotated counter-clockwise by `theta_degrees`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleShape<T: FloatingPoint> {
    center: Point2<T>,
    u_length: T,
    w_length: T,
    theta_degrees: T,
}

impl<T: FloatingPoint> Default for RectangleShape<T> {
    fn default() -> Self {
        Self {
            center: Point2::new(T::constant(0.5), T::constant(0.5)),
            u_length: T::constant(0.2),
            w_length: T::constant(0.2),
            theta_degrees: T::zero(),
        }
    }
}

impl<T: FloatingPoint> RectangleShape<T> {
    pub fn try_new(
        center: Point2<T>,
        u_length: T,
        w_length: T,
        theta_degrees: T,
    ) -> anyhow::Result<Self> {
        ensure!(
            u_length > T::zero() && w_length > T::zero(),
            "rectangle lengths must be positive, got {} x {}",
            u_length,
            w_length
        );
        Ok(Self {
            center,
            u_length,
            w_length,
            theta_degrees,
        })
    }

    pub fn center(&self) -> &Point2<T> {
        &self.center
    }

    pub fn u_length(&self) -> T {
        self.u_length
    }

    pub fn w_length(&self) -> T {
        self.w_length
    }

    pub fn theta_degrees(&self) -> T {
        self.theta_degrees
    }

    /// Corners in counter-clockwise order, starting at the (-u, -w) corner.
    pub fn corners(&self) -> [Point2<T>; 4] {
        let half = T::constant(0.5);
        let du = self.u_length * half;
        let dw = self.w_length * half;
        [
            Vector2::new(-du, -dw),
            Vector2::new(du, -dw),
            Vector2::new(du, dw),
            Vector2::new(-du, dw),
        ]
        .map(|offset| place(&self.center, offset, self.theta_degrees))
    }
}

impl<T: FloatingPoint> BoundaryShape<T> for RectangleShape<T> {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn boundary(&self) -> SegmentChain<T> {
        let [a, b, c, d] = self.corners();
        [a, b, c, d, a]
            .windows(2)
            .map(|w| BoundarySegment::new(w[0], w[1]).with_sense(HalfPlaneSense::Greater))
            .collect()
    }
}
