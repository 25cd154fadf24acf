//! Error types for rekha.
//!
//! Only configuration handling can fail. Extraction degrades to "fewer
//! segments" and reports why through [`crate::extraction::StopReason`].

use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid parameter `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
