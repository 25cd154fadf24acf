//! Geometric feature types produced by extraction.
//!
//! - [`LineModel`]: infinite line in general form, fitted to a seed window
//! - [`LineSegment`]: accepted run of scan points with its seed line

mod line_model;
mod segment;

pub use line_model::LineModel;
pub use segment::LineSegment;
