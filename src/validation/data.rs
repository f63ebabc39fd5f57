//! Input checks for navigation state and measurements

use nalgebra::{Matrix3, Vector3};

use super::error::{NavigationError, Result};
use crate::core::{ImuSample, NavState};
use crate::math::orthogonality_error;

/// Squared radius below which a position is treated as the Earth's center
pub const MIN_RADIUS_SQUARED: f64 = 1e-10;

pub fn ensure_finite_vector(field: &str, v: &Vector3<f64>) -> Result<()> {
    if v.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(NavigationError::NonFinite {
            field: field.to_string(),
        })
    }
}

pub fn ensure_finite_matrix(field: &str, m: &Matrix3<f64>) -> Result<()> {
    if m.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(NavigationError::NonFinite {
            field: field.to_string(),
        })
    }
}

/// Time step must be finite, positive and no larger than `max_dt`
pub fn ensure_time_step(dt: f64, max_dt: f64) -> Result<()> {
    let reason = if !dt.is_finite() {
        "must be finite"
    } else if dt <= 0.0 {
        "must be positive"
    } else if dt > max_dt {
        "exceeds the configured maximum"
    } else {
        return Ok(());
    };

    Err(NavigationError::InvalidTimeStep {
        dt,
        reason: reason.to_string(),
    })
}

/// Position must be finite and at least `min_radius` from the Earth's center
pub fn ensure_position(position: &Vector3<f64>, min_radius: f64) -> Result<()> {
    ensure_finite_vector("position", position)?;

    let radius_squared = position.norm_squared();
    if radius_squared < MIN_RADIUS_SQUARED || radius_squared < min_radius * min_radius {
        return Err(NavigationError::SingularPosition { radius_squared });
    }
    Ok(())
}

/// Attitude must be finite, have no zero row, be a proper rotation and sit
/// within `tolerance` of orthogonal
pub fn ensure_attitude(attitude: &Matrix3<f64>, tolerance: f64) -> Result<()> {
    ensure_finite_matrix("attitude", attitude)?;

    if let Some(row) = (0..3).find(|&i| attitude.row(i).norm() == 0.0) {
        return Err(NavigationError::DegenerateAttitude { row });
    }

    let error = orthogonality_error(attitude);
    if error > tolerance || attitude.determinant() <= 0.0 {
        return Err(NavigationError::AttitudeDrift { error, tolerance });
    }
    Ok(())
}

pub fn ensure_imu_sample(sample: &ImuSample) -> Result<()> {
    ensure_finite_vector("specific_force", &sample.specific_force)?;
    ensure_finite_vector("angular_rate", &sample.angular_rate)
}

pub fn ensure_state(state: &NavState, min_radius: f64, attitude_tolerance: f64) -> Result<()> {
    ensure_position(&state.position, min_radius)?;
    ensure_finite_vector("velocity", &state.velocity)?;
    ensure_attitude(&state.attitude, attitude_tolerance)
}
