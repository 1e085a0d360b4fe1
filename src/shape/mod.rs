pub mod ellipse_shape;
pub mod line_shape;
pub mod rectangle_shape;

pub use ellipse_shape::*;
pub use line_shape::*;
pub use rectangle_shape::*;

use std::fmt;

use nalgebra::{Point2, Rotation2, Vector2};

use crate::{chain::SegmentChain, misc::FloatingPoint};

/// Kind of subsurface outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
        }
    }

    /// Whether subsurfaces of this kind enclose a region tested by polygon containment.
    pub fn is_polygon(&self) -> bool {
        !matches!(self, ShapeKind::Line)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape that produces the boundary chain of a subsurface in normalized (U, W) space.
pub trait BoundaryShape<T: FloatingPoint> {
    fn kind(&self) -> ShapeKind;
    fn boundary(&self) -> SegmentChain<T>;
}

/// Tagged variant over the supported subsurface shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubSurfaceShape<T: FloatingPoint> {
    Line(LineShape<T>),
    Rectangle(RectangleShape<T>),
    Ellipse(EllipseShape<T>),
}

impl<T: FloatingPoint> BoundaryShape<T> for SubSurfaceShape<T> {
    fn kind(&self) -> ShapeKind {
        match self {
            SubSurfaceShape::Line(s) => s.kind(),
            SubSurfaceShape::Rectangle(s) => s.kind(),
            SubSurfaceShape::Ellipse(s) => s.kind(),
        }
    }

    fn boundary(&self) -> SegmentChain<T> {
        match self {
            SubSurfaceShape::Line(s) => s.boundary(),
            SubSurfaceShape::Rectangle(s) => s.boundary(),
            SubSurfaceShape::Ellipse(s) => s.boundary(),
        }
    }
}

impl<T: FloatingPoint> From<LineShape<T>> for SubSurfaceShape<T> {
    fn from(value: LineShape<T>) -> Self {
        SubSurfaceShape::Line(value)
    }
}

impl<T: FloatingPoint> From<RectangleShape<T>> for SubSurfaceShape<T> {
    fn from(value: RectangleShape<T>) -> Self {
        SubSurfaceShape::Rectangle(value)
    }
}

impl<T: FloatingPoint> From<EllipseShape<T>> for SubSurfaceShape<T> {
    fn from(value: EllipseShape<T>) -> Self {
        SubSurfaceShape::Ellipse(value)
    }
}

/// Place a local offset around `center`, rotated by `theta_degrees`.
fn place<T: FloatingPoint>(center: &Point2<T>, offset: Vector2<T>, theta_degrees: T) -> Point2<T> {
    let rotation = Rotation2::new(theta_degrees * T::pi() / T::constant(180.));
    center + rotation * offset
}
