//! # Rekha: Line Segment Extraction for 2D Lidar Scans
//!
//! Turns one revolution of a rotating range sensor into straight wall
//! segments using seeded region growing (SRG).
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha::ExtractionParameters;
//! use rekha::core::{PolarScan, RangeFilterConfig, ScanConverter};
//! use rekha::extraction::extract_line_segments;
//!
//! // A wall 1m to the left of the sensor, sampled every half degree.
//! let mut scan = PolarScan::new();
//! for i in -40..=40 {
//!     let angle = (90.0 + i as f32 * 0.5).to_radians();
//!     scan.push(angle, 1.0 / angle.sin());
//! }
//!
//! let points = ScanConverter::to_points(&scan, &RangeFilterConfig::default());
//! let segments = extract_line_segments(&points, &ExtractionParameters::default());
//!
//! assert_eq!(segments.len(), 1);
//! for segment in &segments {
//!     println!("{} points, {:.2}m", segment.len(), segment.length());
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! ROS REP-103 by default: X-forward, Y-left, angles counter-clockwise
//! positive in radians. Drivers that report clockwise degrees from forward
//! convert with [`core::AngleConvention::ClockwiseDegrees`].
//!
//! ## Architecture
//!
//! - [`core`]: points, raw polar scans and the per-sector obstacle summary
//! - [`features`]: line models and extracted segments
//! - [`extraction`]: line fitting and the SRG extractor
//! - [`config`]: extraction parameters and YAML loading
//!
//! ## Data Flow
//!
//! ```text
//!   PolarScan ──ScanConverter──► ordered Vec<Point2D>
//!                                      │
//!                                      ▼
//!                          seed ─► grow ─► accept/reject
//!                                      │
//!                                      ▼
//!                              Vec<LineSegment>
//! ```
//!
//! Extraction is a pure function of one scan and the parameters; it holds no
//! state between calls.

pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod features;

// Re-export main types at crate root
pub use config::ExtractionParameters;
pub use error::{ConfigError, Result};
pub use extraction::{
    Extraction, LineExtractor, SeededRegionGrowingExtractor, StopReason, extract_line_segments,
};
pub use features::{LineModel, LineSegment};
