//! Nearest obstacle per angular sector.
//!
//! Splits a full turn around the sensor into equal sectors centered on
//! multiples of the sector width, starting straight ahead, and reports the
//! closest valid return in each. Sector `i` covers
//! `[i·width − width/2, i·width + width/2)`, wrapping through forward, so a
//! return just left of forward and one just right of it share sector 0.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::point::Point2D;
use super::scan::{AngleConvention, PolarScan, RangeFilterConfig};

/// Slack when comparing sector centers against the field of view.
const ANGLE_TOLERANCE: f32 = 1e-5;

/// Sector layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorConfig {
    /// Width of each sector in radians.
    /// Default: 10°
    pub sector_width: f32,

    /// Report only sectors whose center is within this angle of forward.
    /// `None` reports the full turn.
    pub half_field_of_view: Option<f32>,
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            sector_width: 10f32.to_radians(),
            half_field_of_view: None,
        }
    }
}

impl SectorConfig {
    /// Sectors of `width` radians covering the full turn.
    pub fn new(sector_width: f32) -> Self {
        Self {
            sector_width,
            half_field_of_view: None,
        }
    }

    /// Restrict reporting to sectors within `half_angle` of forward.
    pub fn with_half_field_of_view(mut self, half_angle: f32) -> Self {
        self.half_field_of_view = Some(half_angle);
        self
    }

    /// Number of sectors in a full turn, 0 for an unusable width.
    pub fn sector_count(&self) -> usize {
        if !(self.sector_width.is_finite() && self.sector_width > 0.0) {
            return 0;
        }
        ((TAU / self.sector_width).round() as usize).max(1)
    }

    fn in_field_of_view(&self, center: f32) -> bool {
        match self.half_field_of_view {
            Some(half) => center.min(TAU - center) <= half + ANGLE_TOLERANCE,
            None => true,
        }
    }
}

/// Closest return within a sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Measured range in meters.
    pub distance: f32,
    /// Cartesian position of the return.
    pub point: Point2D,
}

/// One sector of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Sector center in radians from forward, in `[0, 2π)`, measured in the
    /// sensor's sweep direction.
    pub center: f32,
    /// Closest valid return, if any fell in the sector.
    pub nearest: Option<Obstacle>,
}

/// Find the nearest valid return in every sector of a scan.
///
/// Sectors come back in order of increasing center, limited to the field of
/// view when one is set. On equal distances the earlier sample wins.
pub fn nearest_per_sector(
    scan: &PolarScan,
    filter: &RangeFilterConfig,
    convention: AngleConvention,
    config: &SectorConfig,
) -> Vec<Sector> {
    let count = config.sector_count();
    if count == 0 {
        return Vec::new();
    }
    let width = TAU / count as f32;

    let mut nearest: Vec<Option<Obstacle>> = vec![None; count];
    for sample in &scan.samples {
        if !filter.is_valid(sample.distance) {
            continue;
        }
        let heading = convention.heading(sample.angle);
        if !heading.is_finite() {
            continue;
        }

        let offset = (heading + 0.5 * width).rem_euclid(TAU);
        let idx = (offset / width) as usize % count;

        let closer = nearest[idx].is_none_or(|o| sample.distance < o.distance);
        if closer {
            nearest[idx] = Some(Obstacle {
                distance: sample.distance,
                point: convention.project(sample.angle, sample.distance),
            });
        }
    }

    nearest
        .into_iter()
        .enumerate()
        .map(|(i, nearest)| Sector {
            center: i as f32 * width,
            nearest,
        })
        .filter(|sector| config.in_field_of_view(sector.center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn degrees_scan(samples: &[(f32, f32)]) -> PolarScan {
        let mut scan = PolarScan::with_capacity(samples.len());
        for &(angle, distance) in samples {
            scan.push(angle, distance);
        }
        scan
    }

    fn summary(scan: &PolarScan, config: &SectorConfig) -> Vec<Sector> {
        nearest_per_sector(
            scan,
            &RangeFilterConfig::default(),
            AngleConvention::ClockwiseDegrees,
            config,
        )
    }

    #[test]
    fn test_sector_counts() {
        assert_eq!(SectorConfig::default().sector_count(), 36);
        assert_eq!(SectorConfig::new(30f32.to_radians()).sector_count(), 12);
        assert_eq!(SectorConfig::new(0.0).sector_count(), 0);
        assert_eq!(SectorConfig::new(f32::NAN).sector_count(), 0);
        assert_eq!(SectorConfig::new(10.0).sector_count(), 1);
    }

    #[test]
    fn test_nearest_return_wins() {
        let scan = degrees_scan(&[(1.0, 2.0), (2.0, 0.8), (3.0, 1.5), (4.0, 0.8)]);

        let sectors = summary(&scan, &SectorConfig::default());

        assert_eq!(sectors.len(), 36);
        let obstacle = sectors[0].nearest.unwrap();
        assert_relative_eq!(obstacle.distance, 0.8);
        // First of the equal returns, at 2°.
        assert_relative_eq!(obstacle.point.x, 0.8 * 2f32.to_radians().sin(), epsilon = 1e-6);
        assert!(sectors[1..].iter().all(|s| s.nearest.is_none()));
    }

    #[test]
    fn test_sector_boundaries_and_wrap() {
        // 356° wraps into the forward sector; just past 5° is sector 1.
        let scan = degrees_scan(&[(356.0, 1.0), (4.9, 2.0), (5.1, 3.0), (184.0, 4.0)]);

        let sectors = summary(&scan, &SectorConfig::default());

        assert_relative_eq!(sectors[0].nearest.unwrap().distance, 1.0);
        assert_relative_eq!(sectors[1].nearest.unwrap().distance, 3.0);
        assert_relative_eq!(sectors[18].nearest.unwrap().distance, 4.0);
        assert_relative_eq!(sectors[18].center, std::f32::consts::PI, epsilon = 1e-5);
    }

    #[test]
    fn test_invalid_returns_ignored() {
        let scan = degrees_scan(&[(0.0, 0.0), (1.0, f32::NAN), (2.0, 50.0), (f32::NAN, 1.0)]);
        let sectors = summary(&scan, &SectorConfig::default());
        assert!(sectors.iter().all(|s| s.nearest.is_none()));
    }

    #[test]
    fn test_field_of_view_keeps_forward_sectors() {
        // ±50° of forward in 10° sectors: centers 0..=50 and 310..=350.
        let config = SectorConfig::default().with_half_field_of_view(50f32.to_radians());
        let scan = degrees_scan(&[(50.0, 1.0), (60.0, 1.0), (310.0, 1.0), (300.0, 1.0)]);

        let sectors = summary(&scan, &config);

        assert_eq!(sectors.len(), 11);
        let reported: Vec<usize> = sectors
            .iter()
            .filter(|s| s.nearest.is_some())
            .map(|s| (s.center.to_degrees() / 10.0).round() as usize)
            .collect();
        assert_eq!(reported, vec![5, 31]);
    }

    #[test]
    fn test_counter_clockwise_radians() {
        let mut scan = PolarScan::new();
        scan.push(std::f32::consts::FRAC_PI_2, 1.2); // left
        scan.push(-std::f32::consts::FRAC_PI_2, 0.7); // right

        let config = SectorConfig::new(std::f32::consts::FRAC_PI_2);
        let sectors = nearest_per_sector(
            &scan,
            &RangeFilterConfig::default(),
            AngleConvention::CounterClockwiseRadians,
            &config,
        );

        assert_eq!(sectors.len(), 4);
        let left = sectors[1].nearest.unwrap();
        assert_relative_eq!(left.point.y, 1.2, epsilon = 1e-6);
        let right = sectors[3].nearest.unwrap();
        assert_relative_eq!(right.point.y, -0.7, epsilon = 1e-6);
    }
}
