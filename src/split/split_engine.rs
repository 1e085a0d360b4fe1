use nalgebra::Point2;

use crate::{chain::SegmentChain, misc::FloatingPoint, segment::BoundarySegment};

/// Parametric axis a grid line is constant along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAxis {
    U,
    W,
}

impl GridAxis {
    /// Coordinate of the point measured along this axis.
    pub fn coordinate<T: FloatingPoint>(&self, p: &Point2<T>) -> T {
        match self {
            GridAxis::U => p.x,
            GridAxis::W => p.y,
        }
    }
}

/// Options for splitting a chain at grid lines
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitOptions<T: FloatingPoint> {
    /// A segment is crossed only when the cut parameter lies in `(tolerance, 1 - tolerance)`
    pub tolerance: T,
}

impl<T: FloatingPoint> Default for SplitOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: T::constant(1e-10),
        }
    }
}

impl<T: FloatingPoint> SplitOptions<T> {
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Cuts a working copy of a boundary chain wherever grid lines of the mesh cross it.
///
/// The working chain is disposable: [`SplitEngine::prepare`] copies it from the authoritative chain,
/// split passes mutate it, and the caller consumes the result.
/// The first crossing of a split invocation rotates the chain once so that the segment
/// created by that crossing's pass becomes the start of the chain.
#[derive(Debug, Clone)]
pub struct SplitEngine<T: FloatingPoint> {
    chain: SegmentChain<T>,
    first_split_pending: bool,
    options: SplitOptions<T>,
}

impl<T: FloatingPoint> Default for SplitEngine<T> {
    fn default() -> Self {
        Self::new(SplitOptions::default())
    }
}

impl<T: FloatingPoint> SplitEngine<T> {
    pub fn new(options: SplitOptions<T>) -> Self {
        Self {
            chain: SegmentChain::default(),
            first_split_pending: true,
            options,
        }
    }

    pub fn options(&self) -> &SplitOptions<T> {
        &self.options
    }

    /// Reset the working chain to a copy of `source` and re-arm the one-shot reorder.
    pub fn prepare(&mut self, source: &SegmentChain<T>) {
        self.clean_up();
        self.chain = source.clone();
        self.first_split_pending = true;
    }

    /// Discard the working chain.
    pub fn clean_up(&mut self) {
        self.chain.clear();
    }

    /// Whether the current invocation has not produced a crossing yet.
    pub fn is_first_split_pending(&self) -> bool {
        self.first_split_pending
    }

    pub fn chain(&self) -> &SegmentChain<T> {
        &self.chain
    }

    pub fn segments(&self) -> &[BoundarySegment<T>] {
        self.chain.segments()
    }

    /// Hand the working chain over to the caller, leaving an empty one behind.
    pub fn take(&mut self) -> SegmentChain<T> {
        std::mem::take(&mut self.chain)
    }

    /// Split the working chain at every U grid value, then at every W grid value.
    pub fn split(&mut self, u_values: &[T], w_values: &[T]) {
        for u in u_values {
            self.split_along(GridAxis::U, *u);
        }
        for w in w_values {
            self.split_along(GridAxis::W, *w);
        }
    }

    /// Run one grid line pass over the working chain.
    ///
    /// Every segment whose scaled span crosses `value` strictly inside `(tolerance, 1 - tolerance)`
    /// is truncated at the crossing and followed by its remainder.
    /// Returns the indices at which the remainders were inserted, in the chain as it was before
    /// any reorder.
    pub fn split_along(&mut self, axis: GridAxis, value: T) -> Vec<usize> {
        let tol = self.options.tolerance;
        let upper = T::one() - tol;
        let mut reorder = false;
        let mut insertions = vec![];
        let mut segments = Vec::with_capacity(self.chain.len());

        for (i, mut segment) in self.take().into_iter().enumerate() {
            let p0 = axis.coordinate(segment.scaled_start());
            let p1 = axis.coordinate(segment.scaled_end());
            // parallel segments give an infinite or NaN parameter and fail both comparisons
            let t = (value - p0) / (p1 - p0);
            if t > tol && t < upper {
                if self.first_split_pending {
                    self.first_split_pending = false;
                    reorder = true;
                }
                let remainder = segment.split_at(t);
                insertions.push(i + insertions.len() + 1);
                segments.push(segment);
                segments.push(remainder);
            } else {
                segments.push(segment);
            }
        }
        self.chain = SegmentChain::new(segments);

        log::debug!(
            "split pass {:?} = {}: {} crossings, {} segments",
            axis,
            value,
            insertions.len(),
            self.chain.len()
        );

        if reorder {
            if let Some(&index) = insertions.first() {
                if self.chain.rotate_to(index) {
                    log::debug!("reordered split chain to start at index {}", index);
                }
            }
        }

        insertions
    }
}
