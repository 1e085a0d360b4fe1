use nalgebra::{Point2, Vector2};

use crate::{
    draw::DrawObject,
    misc::{cross_z, FloatingPoint},
    surface::{clamp_and_evaluate, ParametricSurface},
};

/// Which side of an oriented segment counts as containing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HalfPlaneSense {
    /// Contained when the cross product `direction x (point - start)` is positive (left side).
    #[default]
    Greater,
    /// Contained when the cross product is negative (right side).
    Less,
}

impl HalfPlaneSense {
    /// Classify the z component of a cross product. Zero is never contained.
    pub fn accepts<T: FloatingPoint>(&self, cross: T) -> bool {
        match self {
            HalfPlaneSense::Greater => cross > T::zero(),
            HalfPlaneSense::Less => cross < T::zero(),
        }
    }
}

/// Oriented line segment in parametric (U, W) space.
///
/// The normalized endpoints live in `[0, 1] x [0, 1]` and are independent of the surface.
/// The scaled endpoints are the normalized ones multiplied by the owner surface's section counts
/// and are refreshed by [`BoundarySegment::rescale`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundarySegment<T: FloatingPoint> {
    normalized_start: Point2<T>,
    normalized_end: Point2<T>,
    scaled_start: Point2<T>,
    scaled_end: Point2<T>,
    direction: Vector2<T>,
    scale: Vector2<T>,
    sense: HalfPlaneSense,
}

impl<T: FloatingPoint> BoundarySegment<T> {
    /// Create a segment from normalized endpoints.
    /// Until the first rescale, the scaled endpoints equal the normalized ones.
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self {
            normalized_start: start,
            normalized_end: end,
            scaled_start: start,
            scaled_end: end,
            direction: end - start,
            scale: Vector2::new(T::one(), T::one()),
            sense: HalfPlaneSense::default(),
        }
    }

    pub fn with_sense(mut self, sense: HalfPlaneSense) -> Self {
        self.sense = sense;
        self
    }

    pub fn normalized_start(&self) -> &Point2<T> {
        &self.normalized_start
    }

    pub fn normalized_end(&self) -> &Point2<T> {
        &self.normalized_end
    }

    pub fn scaled_start(&self) -> &Point2<T> {
        &self.scaled_start
    }

    pub fn scaled_end(&self) -> &Point2<T> {
        &self.scaled_end
    }

    /// `scaled_end - scaled_start`
    pub fn direction(&self) -> &Vector2<T> {
        &self.direction
    }

    pub fn sense(&self) -> HalfPlaneSense {
        self.sense
    }

    pub fn set_sense(&mut self, sense: HalfPlaneSense) {
        self.sense = sense;
    }

    /// Replace the normalized endpoints, keeping the current section scale.
    pub fn set_normalized(&mut self, start: Point2<T>, end: Point2<T>) {
        self.normalized_start = start;
        self.normalized_end = end;
        self.apply_scale();
    }

    /// Recompute the scaled endpoints from the section counts of the owner surface.
    pub fn rescale(&mut self, num_sections_u: usize, num_sections_w: usize) {
        self.scale = Vector2::new(
            T::from_count(num_sections_u),
            T::from_count(num_sections_w),
        );
        self.apply_scale();
    }

    fn apply_scale(&mut self) {
        self.scaled_start = self.normalized_start.coords.component_mul(&self.scale).into();
        self.scaled_end = self.normalized_end.coords.component_mul(&self.scale).into();
        self.direction = self.scaled_end - self.scaled_start;
    }

    /// Half-plane test against a point in scaled (section) coordinates.
    /// Points exactly on the supporting line are never contained.
    pub fn contains(&self, point: &Point2<T>) -> bool {
        let cross = cross_z(&self.direction, &(point - self.scaled_start));
        self.sense.accepts(cross)
    }

    /// Half-plane test against a point in normalized coordinates.
    /// Agrees with [`BoundarySegment::contains`] for any positive section counts,
    /// since positive per-axis scaling preserves the sign of the cross product.
    pub fn contains_normalized(&self, point: &Point2<T>) -> bool {
        let direction = self.normalized_end - self.normalized_start;
        let cross = cross_z(&direction, &(point - self.normalized_start));
        self.sense.accepts(cross)
    }

    /// Point at parameter `t` along the segment, in both normalized and scaled space.
    pub fn point_at(&self, t: T) -> (Point2<T>, Point2<T>) {
        let lerp = |a: &Point2<T>, b: &Point2<T>| a + (b - a) * t;
        (
            lerp(&self.normalized_start, &self.normalized_end),
            lerp(&self.scaled_start, &self.scaled_end),
        )
    }

    /// Cut the segment at parameter `t`.
    /// `self` is truncated to end at the cut and the remainder is returned,
    /// carrying the same half-plane sense.
    pub fn split_at(&mut self, t: T) -> Self {
        let (normalized, scaled) = self.point_at(t);
        let tail = Self {
            normalized_start: normalized,
            normalized_end: self.normalized_end,
            scaled_start: scaled,
            scaled_end: self.scaled_end,
            direction: self.scaled_end - scaled,
            scale: self.scale,
            sense: self.sense,
        };
        self.normalized_end = normalized;
        self.scaled_end = scaled;
        self.direction = self.scaled_end - self.scaled_start;
        tail
    }

    /// Fill `object` with a line-pair polyline of `num_points * 2` surface points along the segment.
    /// Leaves the object empty when `num_points` is zero.
    pub fn update_draw_object(
        &self,
        surface: &dyn ParametricSurface<T>,
        object: &mut DrawObject<T>,
        num_points: usize,
    ) {
        object.points.clear();
        object.geometry_changed = true;
        if num_points == 0 {
            return;
        }

        let count = T::from_count(num_points);
        object.points.reserve(num_points * 2);
        object
            .points
            .push(clamp_and_evaluate(surface, &self.scaled_start));
        for i in 1..num_points {
            let uw = self.scaled_start + self.direction * (T::from_count(i) / count);
            let p = clamp_and_evaluate(surface, &uw);
            object.points.push(p);
            object.points.push(p);
        }
        object
            .points
            .push(clamp_and_evaluate(surface, &self.scaled_end));
    }
}
