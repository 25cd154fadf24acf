//! Extraction parameters.
//!
//! All thresholds are in the sensor's range units (meters for the
//! deployments this crate was tuned on). Every field has a default, so a
//! YAML file only needs to list what it overrides:
//!
//! ```yaml
//! epsilon: 0.02
//! pmin: 8
//! rejection_policy: advance_seed_window
//! ```

mod defaults;
mod yaml;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
pub use crate::extraction::{FitStrategy, RejectionPolicy};

/// Seeded-region-growing parameters.
///
/// Fixed per deployment and shared read-only across scans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionParameters {
    /// Maximum perpendicular point-to-line distance for membership.
    /// Default: 0.03
    #[serde(default = "defaults::epsilon")]
    pub epsilon: f32,

    /// Point-to-point distance threshold.
    ///
    /// Recognized and validated but not consulted by the extractor; growth
    /// continuity is gated by `gmax` alone.
    /// Default: 0.1
    #[serde(default = "defaults::delta")]
    pub delta: f32,

    /// Seed window size in points.
    /// Default: 6
    #[serde(default = "defaults::snum")]
    pub snum: usize,

    /// Minimum number of points in an accepted segment.
    /// Default: 10
    #[serde(default = "defaults::pmin")]
    pub pmin: usize,

    /// Minimum first-to-last point distance of an accepted segment.
    /// Default: 0.6
    #[serde(default = "defaults::lmin")]
    pub lmin: f32,

    /// Maximum gap between consecutive points of a growing segment.
    /// Default: 0.1
    #[serde(default = "defaults::gmax")]
    pub gmax: f32,

    /// What to do when a seed grows into a segment that fails acceptance.
    /// Default: drop_first_point
    #[serde(default = "defaults::rejection_policy")]
    pub rejection_policy: RejectionPolicy,

    /// Line fitting strategy for seed windows.
    /// Default: ordinary_least_squares
    #[serde(default = "defaults::fit_strategy")]
    pub fit_strategy: FitStrategy,
}

impl Default for ExtractionParameters {
    fn default() -> Self {
        Self {
            epsilon: defaults::epsilon(),
            delta: defaults::delta(),
            snum: defaults::snum(),
            pmin: defaults::pmin(),
            lmin: defaults::lmin(),
            gmax: defaults::gmax(),
            rejection_policy: defaults::rejection_policy(),
            fit_strategy: defaults::fit_strategy(),
        }
    }
}

impl ExtractionParameters {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the point-to-line tolerance.
    pub fn with_epsilon(mut self, value: f32) -> Self {
        self.epsilon = value;
        self
    }

    /// Builder-style setter for the inert point-to-point threshold.
    pub fn with_delta(mut self, value: f32) -> Self {
        self.delta = value;
        self
    }

    /// Builder-style setter for the seed window size.
    pub fn with_snum(mut self, value: usize) -> Self {
        self.snum = value;
        self
    }

    /// Builder-style setter for minimum points per segment.
    pub fn with_pmin(mut self, value: usize) -> Self {
        self.pmin = value;
        self
    }

    /// Builder-style setter for minimum segment length.
    pub fn with_lmin(mut self, value: f32) -> Self {
        self.lmin = value;
        self
    }

    /// Builder-style setter for maximum point gap.
    pub fn with_gmax(mut self, value: f32) -> Self {
        self.gmax = value;
        self
    }

    /// Builder-style setter for the rejection policy.
    pub fn with_rejection_policy(mut self, policy: RejectionPolicy) -> Self {
        self.rejection_policy = policy;
        self
    }

    /// Builder-style setter for the fit strategy.
    pub fn with_fit_strategy(mut self, strategy: FitStrategy) -> Self {
        self.fit_strategy = strategy;
        self
    }

    /// Check parameter ranges.
    ///
    /// A seed window needs at least two points to define a line, and
    /// acceptance must require at least one point.
    pub fn validate(&self) -> Result<()> {
        if self.snum < 2 {
            return Err(ConfigError::invalid(
                "snum",
                format!("must be at least 2, got {}", self.snum),
            ));
        }
        if self.pmin < 1 {
            return Err(ConfigError::invalid("pmin", "must be at least 1"));
        }
        check_non_negative("epsilon", self.epsilon)?;
        check_non_negative("delta", self.delta)?;
        check_non_negative("lmin", self.lmin)?;
        check_non_negative("gmax", self.gmax)?;
        if self.gmax == 0.0 {
            return Err(ConfigError::invalid("gmax", "must be greater than 0"));
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(ConfigError::invalid(
            field,
            format!("must be finite, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExtractionParameters::default();
        assert_eq!(params.epsilon, 0.03);
        assert_eq!(params.delta, 0.1);
        assert_eq!(params.snum, 6);
        assert_eq!(params.pmin, 10);
        assert_eq!(params.lmin, 0.6);
        assert_eq!(params.gmax, 0.1);
        assert_eq!(params.rejection_policy, RejectionPolicy::DropFirstPoint);
        assert_eq!(params.fit_strategy, FitStrategy::OrdinaryLeastSquares);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = ExtractionParameters::new()
            .with_epsilon(0.05)
            .with_snum(4)
            .with_pmin(5)
            .with_lmin(3.0)
            .with_gmax(2.0)
            .with_delta(0.5);

        assert_eq!(params.epsilon, 0.05);
        assert_eq!(params.snum, 4);
        assert_eq!(params.pmin, 5);
        assert_eq!(params.lmin, 3.0);
        assert_eq!(params.gmax, 2.0);
        assert_eq!(params.delta, 0.5);
    }

    #[test]
    fn test_validate_rejects_small_seed() {
        let err = ExtractionParameters::new()
            .with_snum(1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "snum", .. }));
    }

    #[test]
    fn test_validate_rejects_zero_pmin() {
        let err = ExtractionParameters::new()
            .with_pmin(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "pmin", .. }));
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        assert!(
            ExtractionParameters::new()
                .with_epsilon(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            ExtractionParameters::new()
                .with_lmin(f32::NAN)
                .validate()
                .is_err()
        );
        assert!(ExtractionParameters::new().with_gmax(0.0).validate().is_err());
        assert!(
            ExtractionParameters::new()
                .with_delta(f32::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_zero_epsilon_is_valid() {
        assert!(
            ExtractionParameters::new()
                .with_epsilon(0.0)
                .validate()
                .is_ok()
        );
    }
}
