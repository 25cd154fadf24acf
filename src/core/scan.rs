//! Raw lidar scan and its conversion to an ordered Cartesian point sequence.
//!
//! One [`PolarScan`] holds the samples of a single revolution in the order the
//! sensor produced them. [`ScanConverter`] turns it into the ordered point
//! sequence consumed by line extraction, skipping invalid ranges without
//! reordering anything.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// How sample angles map onto the Cartesian frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleConvention {
    /// Radians from +X, counter-clockwise positive (ROS REP-103).
    ///
    /// ```text
    /// x = r * cos(angle)
    /// y = r * sin(angle)
    /// ```
    #[default]
    CounterClockwiseRadians,

    /// Degrees from +Y (forward), clockwise positive, as reported by
    /// RPLidar-style drivers.
    ///
    /// ```text
    /// x = r * sin(angle°)
    /// y = r * cos(angle°)
    /// ```
    ClockwiseDegrees,
}

impl AngleConvention {
    /// Angle in radians from forward, in the sensor's own sweep direction.
    #[inline]
    pub fn heading(self, angle: f32) -> f32 {
        match self {
            AngleConvention::CounterClockwiseRadians => angle,
            AngleConvention::ClockwiseDegrees => angle.to_radians(),
        }
    }

    /// Cartesian position of a sample.
    #[inline]
    pub fn project(self, angle: f32, distance: f32) -> Point2D {
        let (sin_a, cos_a) = self.heading(angle).sin_cos();
        match self {
            AngleConvention::CounterClockwiseRadians => {
                Point2D::new(distance * cos_a, distance * sin_a)
            }
            AngleConvention::ClockwiseDegrees => Point2D::new(distance * sin_a, distance * cos_a),
        }
    }
}

/// A single polar measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarSample {
    /// Sample angle, in the units of the scan's [`AngleConvention`].
    pub angle: f32,
    /// Measured range in meters (0 or NaN = no return).
    pub distance: f32,
}

impl PolarSample {
    /// Create a new sample.
    #[inline]
    pub fn new(angle: f32, distance: f32) -> Self {
        Self { angle, distance }
    }
}

/// Raw lidar scan in polar coordinates.
///
/// Samples are ordered by acquisition (sequential around the revolution).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarScan {
    /// Samples in acquisition order.
    pub samples: Vec<PolarSample>,
}

impl PolarScan {
    /// Create an empty scan.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create an empty scan with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample.
    #[inline]
    pub fn push(&mut self, angle: f32, distance: f32) {
        self.samples.push(PolarSample::new(angle, distance));
    }

    /// Number of samples, valid or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the scan has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Range gate applied before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilterConfig {
    /// Minimum valid range in meters.
    /// Default: 0.0 (only zero ranges are rejected)
    pub min_range: f32,

    /// Maximum valid range in meters.
    /// Default: 12.0m
    pub max_range: f32,
}

impl Default for RangeFilterConfig {
    fn default() -> Self {
        Self {
            min_range: 0.0,
            max_range: 12.0,
        }
    }
}

impl RangeFilterConfig {
    /// Check if a range value is valid.
    ///
    /// Zero, negative, NaN and infinite ranges are never valid.
    #[inline]
    pub fn is_valid(&self, range: f32) -> bool {
        range.is_finite() && range > 0.0 && range >= self.min_range && range <= self.max_range
    }
}

/// Polar to Cartesian conversion for one revolution.
pub struct ScanConverter;

impl ScanConverter {
    /// Convert a polar scan with angles in the default
    /// [`AngleConvention::CounterClockwiseRadians`].
    pub fn to_points(scan: &PolarScan, filter: &RangeFilterConfig) -> Vec<Point2D> {
        Self::to_points_with(scan, filter, AngleConvention::default())
    }

    /// Convert a polar scan into an ordered Cartesian point sequence.
    ///
    /// Samples with an invalid range or a non-finite position are skipped;
    /// the remaining points keep scan order.
    pub fn to_points_with(
        scan: &PolarScan,
        filter: &RangeFilterConfig,
        convention: AngleConvention,
    ) -> Vec<Point2D> {
        let mut points = Vec::with_capacity(scan.len());

        for sample in &scan.samples {
            if !filter.is_valid(sample.distance) {
                continue;
            }

            let point = convention.project(sample.angle, sample.distance);
            if point.is_finite() {
                points.push(point);
            }
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_to_points_forward() {
        let mut scan = PolarScan::new();
        scan.push(0.0, 2.0);

        let points = ScanConverter::to_points(&scan, &RangeFilterConfig::default());

        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(points[0].y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_to_points_left() {
        let mut scan = PolarScan::new();
        scan.push(FRAC_PI_2, 1.5);

        let points = ScanConverter::to_points(&scan, &RangeFilterConfig::default());

        assert_relative_eq!(points[0].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(points[0].y, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_to_points_skips_invalid_and_keeps_order() {
        let mut scan = PolarScan::new();
        scan.push(0.0, 1.0);
        scan.push(0.1, 0.0); // no return
        scan.push(0.2, f32::NAN);
        scan.push(PI, 3.0);
        scan.push(PI + 0.1, 50.0); // beyond max range

        let points = ScanConverter::to_points(&scan, &RangeFilterConfig::default());

        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(points[1].x, -3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_clockwise_degrees_forward_is_y() {
        let mut scan = PolarScan::new();
        scan.push(0.0, 2.0);
        scan.push(90.0, 1.5);

        let points = ScanConverter::to_points_with(
            &scan,
            &RangeFilterConfig::default(),
            AngleConvention::ClockwiseDegrees,
        );

        // 0° is straight ahead (+Y), 90° is to the right (+X).
        assert_relative_eq!(points[0].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(points[0].y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(points[1].x, 1.5, epsilon = 1e-6);
        assert_relative_eq!(points[1].y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_non_finite_angle_skipped() {
        let mut scan = PolarScan::new();
        scan.push(f32::NAN, 1.0);
        scan.push(f32::INFINITY, 1.0);
        scan.push(10.0, 1.0);

        for convention in [
            AngleConvention::CounterClockwiseRadians,
            AngleConvention::ClockwiseDegrees,
        ] {
            let points =
                ScanConverter::to_points_with(&scan, &RangeFilterConfig::default(), convention);
            assert_eq!(points.len(), 1);
        }
    }

    #[test]
    fn test_convention_yaml_names() {
        let c: AngleConvention = serde_yaml::from_str("clockwise_degrees").unwrap();
        assert_eq!(c, AngleConvention::ClockwiseDegrees);
        assert_eq!(AngleConvention::default(), AngleConvention::CounterClockwiseRadians);
    }

    #[test]
    fn test_min_range_gate() {
        let filter = RangeFilterConfig {
            min_range: 0.15,
            max_range: 8.0,
        };
        assert!(!filter.is_valid(0.1));
        assert!(filter.is_valid(0.15));
        assert!(filter.is_valid(8.0));
        assert!(!filter.is_valid(8.01));
        assert!(!filter.is_valid(-1.0));
    }

    #[test]
    fn test_scan_yaml_roundtrip() {
        let mut scan = PolarScan::with_capacity(2);
        scan.push(0.0, 1.0);
        scan.push(0.5, 2.0);

        let yaml = serde_yaml::to_string(&scan).unwrap();
        let parsed: PolarScan = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed, scan);
    }
}
