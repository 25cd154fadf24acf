//! YAML configuration file loading.
//!
//! ```rust,ignore
//! use rekha::ExtractionParameters;
//!
//! let params = ExtractionParameters::from_yaml_file("configs/default.yaml")?;
//! let segments = rekha::extraction::extract_line_segments(&points, &params);
//! ```

use std::path::Path;

use super::ExtractionParameters;
use crate::error::Result;

impl ExtractionParameters {
    /// Load and validate parameters from a YAML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Load and validate parameters from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let params = Self::from_yaml_str_unchecked(yaml)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse parameters from a YAML string without validation.
    pub fn from_yaml_str_unchecked(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save to a YAML file.
    pub fn to_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
