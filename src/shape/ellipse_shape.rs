use anyhow::ensure;
use itertools::Itertools;
use nalgebra::{Point2, Vector2};

use crate::{
    chain::SegmentChain,
    misc::FloatingPoint,
    segment::{BoundarySegment, HalfPlaneSense},
};

use super::{place, BoundaryShape, ShapeKind};

/// Ellipse centered in normalized (U, W) space, approximated by `num_points` segments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseShape<T: FloatingPoint> {
    center: Point2<T>,
    u_length: T,
    w_length: T,
    theta_degrees: T,
    num_points: usize,
}

impl<T: FloatingPoint> Default for EllipseShape<T> {
    fn default() -> Self {
        Self {
            center: Point2::new(T::constant(0.5), T::constant(0.5)),
            u_length: T::constant(0.2),
            w_length: T::constant(0.2),
            theta_degrees: T::zero(),
            num_points: 32,
        }
    }
}

impl<T: FloatingPoint> EllipseShape<T> {
    pub fn try_new(
        center: Point2<T>,
        u_length: T,
        w_length: T,
        theta_degrees: T,
        num_points: usize,
    ) -> anyhow::Result<Self> {
        ensure!(
            u_length > T::zero() && w_length > T::zero(),
            "ellipse lengths must be positive, got {} x {}",
            u_length,
            w_length
        );
        ensure!(
            num_points >= 3,
            "an ellipse needs at least 3 points, got {}",
            num_points
        );
        Ok(Self {
            center,
            u_length,
            w_length,
            theta_degrees,
            num_points,
        })
    }

    pub fn center(&self) -> &Point2<T> {
        &self.center
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Outline points in counter-clockwise order, starting on the +U semi-axis.
    pub fn points(&self) -> Vec<Point2<T>> {
        let half = T::constant(0.5);
        let a = self.u_length * half;
        let b = self.w_length * half;
        let step = T::two_pi() / T::from_count(self.num_points);
        (0..self.num_points)
            .map(|i| {
                let phi = step * T::from_count(i);
                place(
                    &self.center,
                    Vector2::new(a * phi.cos(), b * phi.sin()),
                    self.theta_degrees,
                )
            })
            .collect()
    }
}

impl<T: FloatingPoint> BoundaryShape<T> for EllipseShape<T> {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn boundary(&self) -> SegmentChain<T> {
        self.points()
            .into_iter()
            .circular_tuple_windows()
            .map(|(p0, p1)| BoundarySegment::new(p0, p1).with_sense(HalfPlaneSense::Greater))
            .collect()
    }
}
