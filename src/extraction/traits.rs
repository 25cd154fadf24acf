//! Traits for line extraction algorithms.
//!
//! [`LineExtractor`] lets consumers hold an extractor without knowing which
//! algorithm or fitter sits behind it.

use crate::config::ExtractionParameters;
use crate::core::Point2D;
use crate::features::LineSegment;

use super::line_fitting::{FitStrategy, LineFitter};
use super::seeded_region_growing::{Extraction, extract_line_segments_with};

/// Trait for line extraction algorithms.
///
/// Implementations extract line segments from ordered point sequences
/// (typically from a lidar scan).
///
/// # Example
///
/// ```rust
/// use rekha::extraction::{LineExtractor, SeededRegionGrowingExtractor};
/// use rekha::ExtractionParameters;
/// use rekha::core::Point2D;
///
/// let extractor: Box<dyn LineExtractor> =
///     Box::new(SeededRegionGrowingExtractor::new(ExtractionParameters::default()));
/// let points: Vec<Point2D> = (0..20).map(|i| Point2D::new(i as f32 * 0.05, 1.0)).collect();
/// let segments = extractor.extract(&points);
/// assert_eq!(segments.len(), 1);
/// ```
pub trait LineExtractor: Send + Sync {
    /// Extract line segments from an ordered sequence of points.
    fn extract(&self, points: &[Point2D]) -> Vec<LineSegment>;
}

/// Seeded-region-growing extractor with a fixed parameter set and fitter.
#[derive(Clone, Debug)]
pub struct SeededRegionGrowingExtractor<F = FitStrategy> {
    params: ExtractionParameters,
    fitter: F,
}

impl SeededRegionGrowingExtractor<FitStrategy> {
    /// Create an extractor using the fit strategy named in `params`.
    pub fn new(params: ExtractionParameters) -> Self {
        let fitter = params.fit_strategy;
        Self { params, fitter }
    }
}

impl<F: LineFitter> SeededRegionGrowingExtractor<F> {
    /// Create an extractor with a custom fitter.
    ///
    /// `params.fit_strategy` is ignored.
    pub fn with_fitter(params: ExtractionParameters, fitter: F) -> Self {
        Self { params, fitter }
    }

    /// Get the parameters.
    pub fn params(&self) -> &ExtractionParameters {
        &self.params
    }

    /// Extract with full diagnostics.
    pub fn extract_detailed(&self, points: &[Point2D]) -> Extraction {
        extract_line_segments_with(points, &self.params, &self.fitter)
    }
}

impl Default for SeededRegionGrowingExtractor<FitStrategy> {
    fn default() -> Self {
        Self::new(ExtractionParameters::default())
    }
}

impl<F: LineFitter> LineExtractor for SeededRegionGrowingExtractor<F> {
    fn extract(&self, points: &[Point2D]) -> Vec<LineSegment> {
        self.extract_detailed(points).segments
    }
}
