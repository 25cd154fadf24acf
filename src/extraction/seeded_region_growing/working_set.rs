//! Shrinking pool of not-yet-claimed points for one scan.
//!
//! Stores input indices rather than points, with a head offset so dropping
//! the first point is O(1). Accepted segments are always a contiguous run of
//! the live view, so claiming one is a single order-preserving drain.

use std::ops::Range;

use crate::core::Point2D;

#[derive(Debug)]
pub(crate) struct WorkingSet {
    ids: Vec<usize>,
    head: usize,
}

impl WorkingSet {
    /// Working set covering every index of a `len`-point scan.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            ids: (0..len).collect(),
            head: 0,
        }
    }

    /// Number of unclaimed points.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.ids.len() - self.head
    }

    /// Input indices of unclaimed points, in scan order.
    #[cfg(test)]
    pub(crate) fn indices(&self) -> &[usize] {
        &self.ids[self.head..]
    }

    /// Point at position `pos` of the live view.
    #[inline]
    pub(crate) fn point(&self, points: &[Point2D], pos: usize) -> Point2D {
        points[self.ids[self.head + pos]]
    }

    /// Discard the first unclaimed point, returning its input index.
    pub(crate) fn drop_first(&mut self) -> Option<usize> {
        let id = self.ids.get(self.head).copied()?;
        self.head += 1;
        Some(id)
    }

    /// Remove a contiguous run (positions in the live view), returning the
    /// input indices it held.
    pub(crate) fn claim(&mut self, run: Range<usize>) -> Vec<usize> {
        let start = self.head + run.start;
        let end = self.head + run.end;
        self.ids.drain(start..end).collect()
    }
}
