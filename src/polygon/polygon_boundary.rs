use itertools::Itertools;
use nalgebra::Point2;

use crate::misc::{on_segment, orientation, FloatingPoint, Orientation};

use super::Contains;

/// A closed polygon ring in the parametric plane.
/// The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBoundary<T: FloatingPoint> {
    vertices: Vec<Point2<T>>,
}

impl<T: FloatingPoint> PolygonBoundary<T> {
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &Vec<Point2<T>> {
        &self.vertices
    }

    /// Check if the point lies on an edge or a vertex of the ring.
    pub fn on_boundary(&self, c: &Point2<T>) -> bool {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .any(|(p0, p1)| on_segment(p0, p1, c))
    }

    /// Non-zero winding number of the ring around the point.
    pub fn winding_number(&self, c: &Point2<T>) -> i32 {
        self.vertices.iter().circular_tuple_windows().fold(
            0_i32,
            move |winding_number, (p0, p1)| {
                if p0.y <= c.y {
                    if p1.y > c.y && orientation(p0, p1, c) == Orientation::CounterClockwise {
                        return winding_number + 1;
                    }
                } else if p1.y <= c.y && orientation(p0, p1, c) == Orientation::Clockwise {
                    return winding_number - 1;
                }
                winding_number
            },
        )
    }
}

impl<T: FloatingPoint> FromIterator<Point2<T>> for PolygonBoundary<T> {
    fn from_iter<I: IntoIterator<Item = Point2<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Check if a point is strictly inside the polygon.
/// Points on an edge or a vertex are outside, as are all points of a ring with fewer than three vertices.
/// ```
/// use nalgebra::Point2;
/// use subsurf::prelude::{Contains, PolygonBoundary};
/// let boundary = PolygonBoundary::new(vec![
///   Point2::new(0., 0.),
///   Point2::new(1., 0.),
///   Point2::new(1., 1.),
///   Point2::new(0., 1.),
/// ]);
/// assert!(boundary.contains(&Point2::new(0.5, 0.5), ()));
/// assert!(!boundary.contains(&Point2::new(0.5, 1.5), ()));
/// assert!(!boundary.contains(&Point2::new(0.5, 1.0), ()));
/// ```
impl<T: FloatingPoint> Contains<T> for PolygonBoundary<T> {
    type Option = ();

    fn contains(&self, c: &Point2<T>, _option: Self::Option) -> bool {
        if self.vertices.len() < 3 || self.on_boundary(c) {
            return false;
        }
        self.winding_number(c) != 0
    }
}
