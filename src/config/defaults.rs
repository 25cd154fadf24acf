//! Default value functions for serde deserialization.
//!
//! Values are the ones the sensor deployment was tuned with (meters).

use super::{FitStrategy, RejectionPolicy};

pub fn epsilon() -> f32 {
    0.03
}

pub fn delta() -> f32 {
    0.1
}

pub fn snum() -> usize {
    6
}

pub fn pmin() -> usize {
    10
}

pub fn lmin() -> f32 {
    0.6
}

pub fn gmax() -> f32 {
    0.1
}

pub fn rejection_policy() -> RejectionPolicy {
    RejectionPolicy::DropFirstPoint
}

pub fn fit_strategy() -> FitStrategy {
    FitStrategy::OrdinaryLeastSquares
}
