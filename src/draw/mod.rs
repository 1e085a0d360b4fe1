use nalgebra::{Point3, Vector3};

use crate::{misc::FloatingPoint, surface::OwnerGeometry};

/// Primitive used to interpret a draw object's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawKind {
    /// Consecutive point pairs form independent line segments
    #[default]
    Lines,
}

/// Point list handed to the visualization collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawObject<T: FloatingPoint> {
    pub id: String,
    pub points: Vec<Point3<T>>,
    pub line_width: T,
    pub line_color: Vector3<T>,
    pub kind: DrawKind,
    pub geometry_changed: bool,
}

impl<T: FloatingPoint> Default for DrawObject<T> {
    fn default() -> Self {
        Self {
            id: String::new(),
            points: vec![],
            line_width: T::one(),
            line_color: Vector3::zeros(),
            kind: DrawKind::default(),
            geometry_changed: false,
        }
    }
}

/// Styling applied to subsurface draw objects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawOptions<T: FloatingPoint> {
    /// Width of boundary lines
    pub line_width: T,
    /// Color written when a segment polyline is rebuilt
    pub segment_color: Vector3<T>,
    /// Color stamped on every object when the subsurface hands them out
    pub line_color: Vector3<T>,
}

impl<T: FloatingPoint> Default for DrawOptions<T> {
    fn default() -> Self {
        Self {
            line_width: T::constant(3.),
            segment_color: Vector3::new(
                T::constant(177. / 255.),
                T::one(),
                T::constant(58. / 255.),
            ),
            line_color: Vector3::zeros(),
        }
    }
}

impl<T: FloatingPoint> DrawOptions<T> {
    pub fn with_line_width(mut self, width: T) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_segment_color(mut self, color: Vector3<T>) -> Self {
        self.segment_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Vector3<T>) -> Self {
        self.line_color = color;
        self
    }
}

/// Number of samples per boundary segment polyline for the given owner geometry.
/// The average section count is truncated before it scales the average tessellation,
/// and zero is returned when the geometry carries no surface.
pub fn draw_point_count<T: FloatingPoint>(geometry: &dyn OwnerGeometry<T>) -> usize {
    let Some(surface) = geometry.surface() else {
        return 0;
    };
    let sections = (surface.section_count_u() + surface.section_count_w()) as f64 / 2.0;
    let tessellation = (geometry.tessellation_u() + geometry.tessellation_w()) as f64 / 2.0;
    let count = sections.trunc() * (tessellation - 1.0);
    if count > 0.0 {
        count as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests;
