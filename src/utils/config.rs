use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::math::Normalization;

/// Runtime parameters for the stateful [`Navigator`](crate::mechanization::Navigator)
///
/// Physical constants are deliberately absent; they are fixed by the
/// geodetic model at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Re-orthogonalization applied after every attitude update
    pub normalization: Normalization,
    /// Largest tolerated |C C^T - I| element before the drift monitor reacts
    pub orthogonality_tolerance: f64,
    /// Re-orthogonalize with SVD when the drift monitor trips
    pub svd_fallback: bool,
    /// Largest accepted time step (seconds)
    pub max_time_step_s: f64,
    /// Smallest accepted distance from the Earth's center (meters)
    pub min_radius_m: f64,
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    #[error("I/O error: {message}")]
    IoError { message: String },
    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::Groves,
            orthogonality_tolerance: 1e-6,
            svd_fallback: true,
            max_time_step_s: 1.0,
            min_radius_m: 1.0e6, // well inside the Earth
        }
    }
}

impl NavigatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config = Self::from_json(&content)?;
        log::debug!("Loaded navigator configuration from '{}'", path_str);
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: NavigatorConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = self.to_json()?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        log::debug!("Saved navigator configuration to '{}'", path_str);
        Ok(())
    }

    /// Check every parameter, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_tolerance(self.orthogonality_tolerance)?;
        check_time_step(self.max_time_step_s)?;
        check_min_radius(self.min_radius_m)?;
        Ok(())
    }

    // Runtime parameter adjustment; each setter returns the previous value

    pub fn set_orthogonality_tolerance(&mut self, tolerance: f64) -> Result<f64, ConfigError> {
        check_tolerance(tolerance)?;
        Ok(std::mem::replace(&mut self.orthogonality_tolerance, tolerance))
    }

    pub fn set_max_time_step(&mut self, dt_s: f64) -> Result<f64, ConfigError> {
        check_time_step(dt_s)?;
        Ok(std::mem::replace(&mut self.max_time_step_s, dt_s))
    }

    pub fn set_min_radius(&mut self, radius_m: f64) -> Result<f64, ConfigError> {
        check_min_radius(radius_m)?;
        Ok(std::mem::replace(&mut self.min_radius_m, radius_m))
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_orthogonality_tolerance(mut self, tolerance: f64) -> Self {
        self.orthogonality_tolerance = tolerance;
        self
    }

    pub fn with_svd_fallback(mut self, enabled: bool) -> Self {
        self.svd_fallback = enabled;
        self
    }

    pub fn with_max_time_step(mut self, dt_s: f64) -> Self {
        self.max_time_step_s = dt_s;
        self
    }

    pub fn with_min_radius(mut self, radius_m: f64) -> Self {
        self.min_radius_m = radius_m;
        self
    }
}

fn invalid(parameter: &str, value: f64, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn check_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(invalid("orthogonality_tolerance", tolerance, "must be positive and finite"));
    }
    if tolerance >= 0.1 {
        return Err(invalid(
            "orthogonality_tolerance",
            tolerance,
            "too large for first-order re-orthogonalization",
        ));
    }
    Ok(())
}

fn check_time_step(dt_s: f64) -> Result<(), ConfigError> {
    if !(dt_s.is_finite() && dt_s > 0.0) {
        return Err(invalid("max_time_step_s", dt_s, "must be positive and finite"));
    }
    Ok(())
}

fn check_min_radius(radius_m: f64) -> Result<(), ConfigError> {
    if !(radius_m.is_finite() && radius_m >= 0.0) {
        return Err(invalid("min_radius_m", radius_m, "must be non-negative and finite"));
    }
    Ok(())
}
