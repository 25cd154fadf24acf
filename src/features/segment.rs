//! Extracted line segment.

use serde::{Deserialize, Serialize};

use super::line_model::LineModel;
use crate::core::Point2D;

/// A run of angularly consecutive scan points accepted as one surface.
///
/// Points keep their original scan order. `source_indices[i]` is the index of
/// `points[i]` in the point sequence handed to the extractor, so segments from
/// the same scan can be checked for overlap without comparing coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    points: Vec<Point2D>,
    source_indices: Vec<usize>,
    model: LineModel,
}

impl LineSegment {
    /// Create a segment from matching point and index lists.
    ///
    /// Returns `None` if the lists are empty or differ in length.
    pub fn new(points: Vec<Point2D>, source_indices: Vec<usize>, model: LineModel) -> Option<Self> {
        if points.is_empty() || points.len() != source_indices.len() {
            return None;
        }
        Some(Self {
            points,
            source_indices,
            model,
        })
    }

    /// Build a segment from a claimed run.
    ///
    /// The caller guarantees a non-empty run with one index per point.
    pub(crate) fn from_run(points: Vec<Point2D>, source_indices: Vec<usize>, model: LineModel) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert_eq!(points.len(), source_indices.len());
        Self {
            points,
            source_indices,
            model,
        }
    }

    /// Member points in scan order.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Index of each member point in the input sequence.
    #[inline]
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    /// Line fitted to the seed this segment grew from.
    #[inline]
    pub fn model(&self) -> &LineModel {
        &self.model
    }

    /// First point (in scan order).
    #[inline]
    pub fn start(&self) -> Point2D {
        self.points[0]
    }

    /// Last point (in scan order).
    #[inline]
    pub fn end(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    /// `(start, end)` pair.
    #[inline]
    pub fn endpoints(&self) -> (Point2D, Point2D) {
        (self.start(), self.end())
    }

    /// Euclidean distance between the first and last point.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start().distance(&self.end())
    }

    /// Number of member points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the segment has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
