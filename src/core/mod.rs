//! Fundamental types: points and raw scans.
//!
//! - [`Point2D`]: Cartesian point in meters
//! - [`PolarScan`]: one revolution of raw polar samples
//! - [`ScanConverter`]: polar scan to ordered point sequence
//! - [`nearest_per_sector`]: closest return in each angular sector

mod point;
mod scan;
pub mod sectors;

pub use point::Point2D;
pub use scan::{AngleConvention, PolarSample, PolarScan, RangeFilterConfig, ScanConverter};
pub use sectors::{Obstacle, Sector, SectorConfig, nearest_per_sector};
