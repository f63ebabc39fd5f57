//! Stateful wrapper threading the navigation state across epochs
//!
//! [`Navigator`] validates every epoch before handing it to the pure
//! mechanization, computes gravitation itself and watches the attitude for
//! orthogonality drift. A rejected epoch leaves the state untouched.

use nalgebra::Vector3;

use super::ecef::propagate_with;
use crate::core::{ImuSample, NavState, Wgs84};
use crate::geodetic::try_gravitation;
use crate::math::{normalize_svd, orthogonality_error};
use crate::utils::config::NavigatorConfig;
use crate::validation::data::{ensure_imu_sample, ensure_position, ensure_state, ensure_time_step};
use crate::validation::{NavigationError, Result};

/// Inertial navigator in the ECEF frame
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavState,
    config: NavigatorConfig,
    /// Number of accepted epochs since construction or reset
    epoch: u64,
    /// Integrated time since construction or reset (seconds)
    elapsed_s: f64,
}

impl Navigator {
    /// Create a navigator from a validated configuration and initial state
    pub fn new(initial: NavState, config: NavigatorConfig) -> Result<Self> {
        config.validate()?;
        ensure_state(&initial, config.min_radius_m, config.orthogonality_tolerance)?;

        Ok(Self {
            state: initial,
            config,
            epoch: 0,
            elapsed_s: 0.0,
        })
    }

    /// Navigator with default configuration
    pub fn with_defaults(initial: NavState) -> Result<Self> {
        Self::new(initial, NavigatorConfig::default())
    }

    /// Advance the state by one inertial epoch of length `dt` seconds
    pub fn step(&mut self, imu: &ImuSample, dt: f64) -> Result<NavState> {
        ensure_time_step(dt, self.config.max_time_step_s)?;
        ensure_imu_sample(imu)?;
        ensure_position(&self.state.position, self.config.min_radius_m)?;

        let gravitation = try_gravitation(&self.state.position)?;
        let (position, velocity, mut attitude) = propagate_with::<Wgs84>(
            &self.state.position,
            &self.state.velocity,
            &self.state.attitude,
            &gravitation,
            &imu.specific_force,
            &imu.angular_rate,
            dt,
            self.config.normalization,
        );

        let drift = orthogonality_error(&attitude);
        if !drift.is_finite() {
            return Err(NavigationError::NonFinite {
                field: "attitude".to_string(),
            });
        }
        if drift > self.config.orthogonality_tolerance {
            log::warn!(
                "Attitude orthogonality error {:.3e} exceeds tolerance {:.3e} at epoch {}",
                drift,
                self.config.orthogonality_tolerance,
                self.epoch
            );
            if self.config.svd_fallback {
                attitude = normalize_svd(&attitude);
                log::debug!(
                    "SVD re-orthogonalization reduced error to {:.3e}",
                    orthogonality_error(&attitude)
                );
            }
        }

        self.state = NavState::new(position, velocity, attitude);
        self.epoch += 1;
        self.elapsed_s += dt;

        log::trace!(
            "epoch {} dt={:.4} s speed={:.3} m/s |g|={:.5} m/s^2",
            self.epoch,
            dt,
            velocity.norm(),
            gravitation.norm()
        );

        Ok(self.state)
    }

    /// Current state estimate
    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed_s
    }

    /// Gravitation at the current position
    pub fn gravitation(&self) -> Result<Vector3<f64>> {
        try_gravitation(&self.state.position)
    }

    /// Replace the state and restart the epoch counter
    pub fn reset(&mut self, state: NavState) -> Result<()> {
        ensure_state(&state, self.config.min_radius_m, self.config.orthogonality_tolerance)?;
        self.state = state;
        self.epoch = 0;
        self.elapsed_s = 0.0;
        Ok(())
    }
}
