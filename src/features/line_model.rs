//! General-form line model `A·x + B·y + C = 0`.
//!
//! # Point-to-Line Distance
//!
//! ```text
//! distance = |A·x + B·y + C| / sqrt(A² + B²)
//! ```
//!
//! A `LineModel` can only be built through the checked constructors, which
//! reject non-finite coefficients and a zero normal. Every model in hand
//! therefore yields finite distances.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Infinite 2D line in general form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineModel {
    a: f32,
    b: f32,
    c: f32,
}

impl LineModel {
    /// Create a line from general-form coefficients.
    ///
    /// Returns `None` if any coefficient is non-finite or `A = B = 0`.
    pub fn new(a: f32, b: f32, c: f32) -> Option<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return None;
        }
        let norm_sq = a * a + b * b;
        if norm_sq <= f32::MIN_POSITIVE || !norm_sq.is_finite() {
            return None;
        }
        Some(Self { a, b, c })
    }

    /// Create a line from slope-intercept form `y = m·x + c`.
    ///
    /// Converted as `A = -m`, `B = 1`, `C = -c`.
    pub fn from_slope_intercept(slope: f32, intercept: f32) -> Option<Self> {
        Self::new(-slope, 1.0, -intercept)
    }

    /// Create a line through `point` with the given normal direction.
    pub fn from_point_normal(point: Point2D, normal_x: f32, normal_y: f32) -> Option<Self> {
        Self::new(
            normal_x,
            normal_y,
            -(normal_x * point.x + normal_y * point.y),
        )
    }

    /// Coefficient A.
    #[inline]
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Coefficient B.
    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// Coefficient C.
    #[inline]
    pub fn c(&self) -> f32 {
        self.c
    }

    /// Coefficients as an `(A, B, C)` tuple.
    #[inline]
    pub fn coefficients(&self) -> (f32, f32, f32) {
        (self.a, self.b, self.c)
    }

    /// Perpendicular distance from a point to this line.
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f32 {
        (self.a * point.x + self.b * point.y + self.c).abs() / self.a.hypot(self.b)
    }

    /// Line direction angle in radians, in `(-π/2, π/2]`.
    pub fn angle(&self) -> f32 {
        // Direction is perpendicular to the normal (A, B).
        let angle = (-self.a).atan2(self.b);
        if angle > std::f32::consts::FRAC_PI_2 {
            angle - std::f32::consts::PI
        } else if angle <= -std::f32::consts::FRAC_PI_2 {
            angle + std::f32::consts::PI
        } else {
            angle
        }
    }
}
