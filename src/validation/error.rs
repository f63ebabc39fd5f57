//! Error types for the checked navigation entry points
//!
//! The pure mechanization functions never fail; they propagate NaN/Inf and
//! leave singular inputs to the caller. These errors are produced only by the
//! checking layer wrapped around them.

use thiserror::Error;

use crate::utils::config::ConfigError;

/// Navigation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("Position too close to the Earth's center: |r|^2 = {radius_squared:e} m^2")]
    SingularPosition { radius_squared: f64 },

    #[error("Invalid time step {dt} s: {reason}")]
    InvalidTimeStep { dt: f64, reason: String },

    #[error("Non-finite value in {field}")]
    NonFinite { field: String },

    #[error("Attitude row {row} has zero norm")]
    DegenerateAttitude { row: usize },

    #[error("Attitude orthogonality error {error:e} exceeds tolerance {tolerance:e}")]
    AttitudeDrift { error: f64, tolerance: f64 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, NavigationError>;
