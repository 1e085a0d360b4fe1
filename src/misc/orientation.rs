use nalgebra::Point2;
use robust::{orient2d, Coord};

use super::FloatingPoint;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

fn to_coord<T: FloatingPoint>(p: &Point2<T>) -> Coord<f64> {
    Coord {
        x: p.x.to_f64().unwrap_or(f64::NAN),
        y: p.y.to_f64().unwrap_or(f64::NAN),
    }
}

/// Robust orientation test for three points.
/// implementation from geo crate. (https://github.com/georust/geo)
pub fn orientation<T: FloatingPoint>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> Orientation {
    let orientation = orient2d(to_coord(p), to_coord(q), to_coord(r));

    if orientation < 0. {
        Orientation::Clockwise
    } else if orientation > 0. {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Check if `r` lies on the closed segment `p`-`q`.
pub fn on_segment<T: FloatingPoint>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> bool {
    if orientation(p, q, r) != Orientation::Collinear {
        return false;
    }
    let within = |a: T, b: T, c: T| a.min(b) <= c && c <= a.max(b);
    within(p.x, q.x, r.x) && within(p.y, q.y, r.y)
}

/// Z component of the 2D cross product `a x b`.
pub fn cross_z<T: FloatingPoint>(a: &nalgebra::Vector2<T>, b: &nalgebra::Vector2<T>) -> T {
    a.x * b.y - a.y * b.x
}
