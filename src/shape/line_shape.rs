use anyhow::ensure;
use nalgebra::Point2;

use crate::{
    chain::SegmentChain,
    misc::FloatingPoint,
    segment::{BoundarySegment, HalfPlaneSense},
};

use super::{BoundaryShape, ShapeKind};

/// Axis held constant along a line subsurface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantAxis {
    U,
    W,
}

/// A straight line across the whole surface at a constant U or W.
/// The side selected by `sense` is tagged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineShape<T: FloatingPoint> {
    axis: ConstantAxis,
    value: T,
    sense: HalfPlaneSense,
}

impl<T: FloatingPoint> LineShape<T> {
    pub fn try_new(axis: ConstantAxis, value: T, sense: HalfPlaneSense) -> anyhow::Result<Self> {
        ensure!(
            value >= T::zero() && value <= T::one(),
            "constant value {} is outside [0, 1]",
            value
        );
        Ok(Self { axis, value, sense })
    }

    pub fn axis(&self) -> ConstantAxis {
        self.axis
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn sense(&self) -> HalfPlaneSense {
        self.sense
    }
}

impl<T: FloatingPoint> BoundaryShape<T> for LineShape<T> {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn boundary(&self) -> SegmentChain<T> {
        let (start, end) = match self.axis {
            ConstantAxis::U => (
                Point2::new(self.value, T::zero()),
                Point2::new(self.value, T::one()),
            ),
            ConstantAxis::W => (
                Point2::new(T::zero(), self.value),
                Point2::new(T::one(), self.value),
            ),
        };
        SegmentChain::new(vec![BoundarySegment::new(start, end).with_sense(self.sense)])
    }
}
