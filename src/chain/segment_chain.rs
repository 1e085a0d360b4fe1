use std::ops::{Index, IndexMut};

use anyhow::ensure;
use itertools::Itertools;
use nalgebra::Point2;

use crate::{
    misc::FloatingPoint,
    segment::{BoundarySegment, HalfPlaneSense},
};

/// Ordered outline of a subsurface.
///
/// Adjacent segments are expected to share endpoints (`segment[i].end == segment[i + 1].start`).
/// [`SegmentChain::new`] does not check this; [`SegmentChain::try_new`] does.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentChain<T: FloatingPoint> {
    segments: Vec<BoundarySegment<T>>,
}

impl<T: FloatingPoint> Default for SegmentChain<T> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<T: FloatingPoint> SegmentChain<T> {
    pub fn new(segments: Vec<BoundarySegment<T>>) -> Self {
        Self { segments }
    }

    /// Create a chain, checking that every joint is connected on the normalized points.
    pub fn try_new(segments: Vec<BoundarySegment<T>>) -> anyhow::Result<Self> {
        let chain = Self::new(segments);
        if let Some(i) = chain.first_disconnected_joint(T::constant(1e-10)) {
            anyhow::bail!(
                "segment {} ends at {:?} but segment {} starts at {:?}",
                i,
                chain.segments[i].normalized_end(),
                i + 1,
                chain.segments[i + 1].normalized_start()
            );
        }
        Ok(chain)
    }

    /// Build an open polyline through normalized points. Close it by repeating the first point.
    pub fn try_polyline(points: &[Point2<T>], sense: HalfPlaneSense) -> anyhow::Result<Self> {
        ensure!(
            points.len() >= 2,
            "a polyline needs at least 2 points, got {}",
            points.len()
        );
        Ok(Self::new(
            points
                .iter()
                .tuple_windows()
                .map(|(a, b)| BoundarySegment::new(*a, *b).with_sense(sense))
                .collect(),
        ))
    }

    pub fn segments(&self) -> &[BoundarySegment<T>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoundarySegment<T>> {
        self.segments.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, BoundarySegment<T>> {
        self.segments.iter_mut()
    }

    pub fn push(&mut self, segment: BoundarySegment<T>) {
        self.segments.push(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Rescale every segment to the given section counts.
    pub fn rescale(&mut self, num_sections_u: usize, num_sections_w: usize) {
        self.segments
            .iter_mut()
            .for_each(|s| s.rescale(num_sections_u, num_sections_w));
    }

    /// Rotate the chain left so that `index` becomes the first segment, preserving relative order.
    /// Returns false and leaves the chain untouched when `index` is out of range.
    pub fn rotate_to(&mut self, index: usize) -> bool {
        if index >= self.segments.len() {
            return false;
        }
        self.segments.rotate_left(index);
        true
    }

    /// Every segment's normalized start followed by the last segment's normalized end.
    pub fn normalized_ring(&self) -> Vec<Point2<T>> {
        let mut ring = self
            .segments
            .iter()
            .map(|s| *s.normalized_start())
            .collect_vec();
        if let Some(last) = self.segments.last() {
            ring.push(*last.normalized_end());
        }
        ring
    }

    /// Index `i` of the first joint where `segment[i].end` and `segment[i + 1].start` differ by more than `tolerance`.
    pub fn first_disconnected_joint(&self, tolerance: T) -> Option<usize> {
        self.segments
            .iter()
            .tuple_windows()
            .position(|(a, b)| (a.normalized_end() - b.normalized_start()).norm() > tolerance)
    }

    /// Check that the last segment ends where the first one starts.
    pub fn is_closed(&self, tolerance: T) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => {
                (last.normalized_end() - first.normalized_start()).norm() <= tolerance
            }
            _ => false,
        }
    }

    pub fn into_segments(self) -> Vec<BoundarySegment<T>> {
        self.segments
    }
}

impl<T: FloatingPoint> Index<usize> for SegmentChain<T> {
    type Output = BoundarySegment<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

impl<T: FloatingPoint> IndexMut<usize> for SegmentChain<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.segments[index]
    }
}

impl<T: FloatingPoint> FromIterator<BoundarySegment<T>> for SegmentChain<T> {
    fn from_iter<I: IntoIterator<Item = BoundarySegment<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: FloatingPoint> IntoIterator for SegmentChain<T> {
    type Item = BoundarySegment<T>;
    type IntoIter = std::vec::IntoIter<BoundarySegment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a, T: FloatingPoint> IntoIterator for &'a SegmentChain<T> {
    type Item = &'a BoundarySegment<T>;
    type IntoIter = std::slice::Iter<'a, BoundarySegment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
