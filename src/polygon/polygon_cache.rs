use nalgebra::Point2;

use crate::{chain::SegmentChain, misc::FloatingPoint};

use super::{Contains, PolygonBoundary};

/// Lazily built containment polygon of a segment chain.
///
/// The ring holds every segment's normalized start followed by the last segment's normalized end.
/// It is rebuilt only on the first query after [`PolygonCache::invalidate`].
#[derive(Debug, Clone)]
pub struct PolygonCache<T: FloatingPoint> {
    boundary: Option<PolygonBoundary<T>>,
}

impl<T: FloatingPoint> Default for PolygonCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> PolygonCache<T> {
    pub fn new() -> Self {
        Self { boundary: None }
    }

    pub fn is_valid(&self) -> bool {
        self.boundary.is_some()
    }

    pub fn invalidate(&mut self) {
        self.boundary = None;
    }

    /// Get the cached polygon, building it from `chain` when invalid.
    pub fn polygon(&mut self, chain: &SegmentChain<T>) -> &PolygonBoundary<T> {
        self.boundary.get_or_insert_with(|| {
            let boundary = PolygonBoundary::new(chain.normalized_ring());
            log::trace!(
                "rebuilt containment polygon with {} vertices",
                boundary.vertices().len()
            );
            boundary
        })
    }

    /// Test a normalized point against the polygon of `chain`.
    pub fn contains(&mut self, chain: &SegmentChain<T>, point: &Point2<T>) -> bool {
        self.polygon(chain).contains(point, ())
    }
}
