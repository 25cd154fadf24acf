//! Line segment extraction from ordered scan points.
//!
//! # Algorithms
//!
//! - **Line Fitting**: ordinary least squares (y on x) and total least
//!   squares, behind the [`LineFitter`] trait
//! - **Seeded Region Growing**: seed windows grown along the scan order into
//!   disjoint segments
//!
//! # Swapping the Fitter
//!
//! Near-vertical walls defeat the y-on-x fit; those windows are reported as
//! degenerate and skipped. Total least squares handles any orientation:
//!
//! ```rust,ignore
//! use rekha::extraction::{extract_line_segments_with, TotalLeastSquares};
//!
//! let result = extract_line_segments_with(&points, &params, &TotalLeastSquares);
//! println!("{} segments, stopped on {:?}", result.segments.len(), result.stop_reason);
//! ```

pub mod line_fitting;
pub mod seeded_region_growing;
pub mod traits;

pub use line_fitting::{
    FitStrategy, LineFitter, OrdinaryLeastSquares, TotalLeastSquares, all_within,
    max_distance_point, point_to_line_distance, point_to_point_distance,
};
pub use seeded_region_growing::{
    Extraction, RejectionPolicy, StopReason, extract_line_segments, extract_line_segments_with,
};
pub use traits::{LineExtractor, SeededRegionGrowingExtractor};
