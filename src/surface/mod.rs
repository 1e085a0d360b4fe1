use std::{collections::HashMap, fmt};

use nalgebra::{Point2, Point3};

use crate::misc::FloatingPoint;

/// Identifier of the geometry entity owning a subsurface.
/// Only the id is stored; the entity is looked up through a [`GeometryLookup`] on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryId(String);

impl GeometryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeometryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A surface evaluated over the section-scaled (U, W) domain
/// `[0, section_count_u] x [0, section_count_w]`.
pub trait ParametricSurface<T: FloatingPoint> {
    fn section_count_u(&self) -> usize;
    fn section_count_w(&self) -> usize;
    fn point_at(&self, u: T, w: T) -> Point3<T>;
}

/// Geometry entity that may carry a surface.
pub trait OwnerGeometry<T: FloatingPoint> {
    fn surface(&self) -> Option<&dyn ParametricSurface<T>>;

    /// Tessellation count along U, used to size draw point lists.
    fn tessellation_u(&self) -> usize;

    /// Tessellation count along W, used to size draw point lists.
    fn tessellation_w(&self) -> usize;
}

/// Resolve an owner id to its geometry.
pub trait GeometryLookup<T: FloatingPoint> {
    fn resolve(&self, id: &GeometryId) -> Option<&dyn OwnerGeometry<T>>;
}

impl<T: FloatingPoint, G: OwnerGeometry<T>> GeometryLookup<T> for HashMap<GeometryId, G> {
    fn resolve(&self, id: &GeometryId) -> Option<&dyn OwnerGeometry<T>> {
        self.get(id).map(|g| g as &dyn OwnerGeometry<T>)
    }
}

/// Triangle whose parametric centroid can be computed.
pub trait ParametricTriangle<T: FloatingPoint> {
    /// Centroid in normalized (U, W) coordinates.
    fn parametric_centroid(&self) -> Point2<T>;
}

impl<T: FloatingPoint> ParametricTriangle<T> for [Point2<T>; 3] {
    fn parametric_centroid(&self) -> Point2<T> {
        let [a, b, c] = self;
        Point2::from((a.coords + b.coords + c.coords) / T::constant(3.))
    }
}

/// Evaluate the surface at a section-scaled point.
/// Coordinates outside `[0, section_count_u] x [0, section_count_w]` are clamped to the domain.
pub fn clamp_and_evaluate<T: FloatingPoint>(
    surface: &dyn ParametricSurface<T>,
    uw: &Point2<T>,
) -> Point3<T> {
    let u_max = T::from_count(surface.section_count_u());
    let w_max = T::from_count(surface.section_count_w());
    let u = uw.x.clamp(T::zero(), u_max);
    let w = uw.y.clamp(T::zero(), w_max);
    surface.point_at(u, w)
}
