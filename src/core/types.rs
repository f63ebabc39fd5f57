//! Core data types for the navigation state

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Position, velocity and attitude in the ECEF frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    /// ECEF position (m)
    pub position: Vector3<f64>,
    /// ECEF velocity (m/s)
    pub velocity: Vector3<f64>,
    /// Body-to-ECEF rotation matrix
    pub attitude: Matrix3<f64>,
}

impl NavState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>, attitude: Matrix3<f64>) -> Self {
        Self {
            position,
            velocity,
            attitude,
        }
    }

    /// Stationary state with the body axes aligned to ECEF
    pub fn at_rest(position: Vector3<f64>) -> Self {
        Self::new(position, Vector3::zeros(), Matrix3::identity())
    }
}

/// One inertial measurement epoch, both quantities in the body frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImuSample {
    /// Accelerometer output (m/s^2), gravitation excluded
    pub specific_force: Vector3<f64>,
    /// Gyroscope output (rad/s), Earth rate excluded
    pub angular_rate: Vector3<f64>,
}

impl ImuSample {
    pub fn new(specific_force: Vector3<f64>, angular_rate: Vector3<f64>) -> Self {
        Self {
            specific_force,
            angular_rate,
        }
    }

    /// Sample with no sensed force or rotation
    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }
}
