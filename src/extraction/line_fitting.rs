//! Line fitting and distance primitives.
//!
//! Seed detection only needs "fit a line to a window, or say the window is
//! unusable". That capability is the [`LineFitter`] trait, with two
//! implementations:
//!
//! - [`OrdinaryLeastSquares`]: regresses y on x. Fails for vertical windows.
//! - [`TotalLeastSquares`]: orthogonal regression along the principal axis.
//!   Works at any orientation; fails only when the window has no extent.
//!
//! Both return `None` (a degenerate fit) instead of a model with non-finite
//! coefficients.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::features::LineModel;

/// Windows whose x-variance is below this share of the total variance are
/// treated as vertical by [`OrdinaryLeastSquares`].
const MIN_X_VARIANCE_RATIO: f32 = 1e-6;

/// Fits a [`LineModel`] to a window of points.
///
/// Returns `None` when the window cannot define a line for this strategy.
pub trait LineFitter: Send + Sync {
    /// Fit a line through at least two points.
    fn fit(&self, points: &[Point2D]) -> Option<LineModel>;
}

/// Ordinary least squares, y as a function of x.
///
/// Minimizes vertical residuals of `y = m·x + c`, then converts to general
/// form `(-m, 1, -c)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrdinaryLeastSquares;

impl LineFitter for OrdinaryLeastSquares {
    fn fit(&self, points: &[Point2D]) -> Option<LineModel> {
        let moments = Moments::compute(points)?;

        let total = moments.sxx + moments.syy;
        if moments.sxx <= MIN_X_VARIANCE_RATIO * total {
            return None;
        }

        let slope = moments.sxy / moments.sxx;
        let intercept = moments.mean.y - slope * moments.mean.x;
        LineModel::from_slope_intercept(slope, intercept)
    }
}

/// Total least squares (orthogonal regression).
///
/// The line passes through the centroid along the eigenvector of the largest
/// eigenvalue of the 2x2 covariance matrix:
///
/// ```text
/// θ = ½ · atan2(2·Sxy, Sxx − Syy)
/// normal = (−sin θ, cos θ)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalLeastSquares;

impl LineFitter for TotalLeastSquares {
    fn fit(&self, points: &[Point2D]) -> Option<LineModel> {
        let moments = Moments::compute(points)?;

        let theta = 0.5 * (2.0 * moments.sxy).atan2(moments.sxx - moments.syy);
        let (sin_t, cos_t) = theta.sin_cos();
        LineModel::from_point_normal(moments.mean, -sin_t, cos_t)
    }
}

/// Selectable fitting strategy, for configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStrategy {
    /// [`OrdinaryLeastSquares`]
    #[default]
    OrdinaryLeastSquares,
    /// [`TotalLeastSquares`]
    TotalLeastSquares,
}

impl LineFitter for FitStrategy {
    fn fit(&self, points: &[Point2D]) -> Option<LineModel> {
        match self {
            FitStrategy::OrdinaryLeastSquares => OrdinaryLeastSquares.fit(points),
            FitStrategy::TotalLeastSquares => TotalLeastSquares.fit(points),
        }
    }
}

/// Centroid and centered second moments of a window.
struct Moments {
    mean: Point2D,
    sxx: f32,
    syy: f32,
    sxy: f32,
}

impl Moments {
    /// Returns `None` for fewer than two points, non-finite input, or a
    /// window with no spatial extent.
    fn compute(points: &[Point2D]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        // Offsets from the first point keep coincident points exactly zero.
        let origin = points[0];
        let n = points.len() as f32;

        let mut sum_dx: f32 = 0.0;
        let mut sum_dy: f32 = 0.0;
        for p in points {
            sum_dx += p.x - origin.x;
            sum_dy += p.y - origin.y;
        }
        let mean_dx = sum_dx / n;
        let mean_dy = sum_dy / n;

        let mut sxx: f32 = 0.0;
        let mut syy: f32 = 0.0;
        let mut sxy: f32 = 0.0;
        for p in points {
            let dx = p.x - origin.x - mean_dx;
            let dy = p.y - origin.y - mean_dy;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        if !(sxx.is_finite() && syy.is_finite() && sxy.is_finite()) {
            return None;
        }

        // Spread below f32 resolution at this magnitude is rounding noise.
        let scale = f32::EPSILON * (1.0 + origin.x.abs() + origin.y.abs());
        if (sxx + syy) / n <= scale * scale {
            return None;
        }

        Some(Self {
            mean: Point2D::new(origin.x + mean_dx, origin.y + mean_dy),
            sxx,
            syy,
            sxy,
        })
    }
}

/// Perpendicular distance from a point to a line.
#[inline]
pub fn point_to_line_distance(line: &LineModel, point: Point2D) -> f32 {
    line.distance_to_point(point)
}

/// Euclidean distance between two points.
#[inline]
pub fn point_to_point_distance(a: Point2D, b: Point2D) -> f32 {
    a.distance(&b)
}

/// True if every point lies within `tolerance` of the line.
///
/// An empty slice is trivially within tolerance.
#[inline]
pub fn all_within(points: &[Point2D], line: &LineModel, tolerance: f32) -> bool {
    max_distance_point(points, line).is_none_or(|(_, max_dist)| max_dist <= tolerance)
}

/// Find the point with maximum distance from a line.
///
/// Returns (index, distance) of the farthest point, or `None` if empty.
/// A non-finite point counts as farthest.
pub fn max_distance_point(points: &[Point2D], line: &LineModel) -> Option<(usize, f32)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, point_to_line_distance(line, *p)))
        .fold(None, |best, (i, d)| match best {
            Some((_, best_d)) if best_d.is_nan() || best_d >= d => best,
            _ => Some((i, d)),
        })
}
