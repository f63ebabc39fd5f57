//! Strapdown mechanization in the Earth-centered Earth-fixed frame
//!
//! Forward propagation of position, velocity and attitude from one epoch of
//! specific force and angular rate, following Section 5.5.1 of Groves,
//! Principles of GNSS, Inertial, and Multisensor Integrated Navigation
//! Systems. The angular rate is taken as constant across the interval.
//!
//! These functions are pure: the caller owns the state and the loop, and
//! supplies gravitation evaluated at the prior position.

use nalgebra::{Matrix3, Vector3};

use crate::core::{GeodeticModel, ImuSample, NavState, Wgs84};
use crate::math::{mean_attitude_update, rotation_exp, so3, Normalization};

/// Skew-symmetric Earth rate matrix of the model
pub fn earth_rate_matrix<M: GeodeticModel>() -> Matrix3<f64> {
    so3(&Vector3::new(0.0, 0.0, M::ROTATION_RATE))
}

/// Propagate one epoch for Earth model `M`
///
/// NaN and infinite inputs propagate to the outputs. `dt` must be positive;
/// this is not checked.
#[allow(clippy::too_many_arguments)]
pub fn propagate_with<M: GeodeticModel>(
    position_minus: &Vector3<f64>,
    velocity_minus: &Vector3<f64>,
    attitude_minus: &Matrix3<f64>,
    gravitation: &Vector3<f64>,
    specific_force: &Vector3<f64>,
    angular_rate: &Vector3<f64>,
    dt: f64,
    normalization: Normalization,
) -> (Vector3<f64>, Vector3<f64>, Matrix3<f64>) {
    let omega = earth_rate_matrix::<M>();

    // Body rotation over the interval, eq. (5.69)
    let alpha = angular_rate * dt;
    let body_rotation = rotation_exp(&alpha);

    // Attitude update with Earth rotation compensation, eq. (5.75)
    let attitude_plus =
        normalization.apply(&(attitude_minus * body_rotation - omega * attitude_minus * dt));

    // Resolve specific force at the mean attitude over the interval, eq. (5.85)
    let mean_rotation = mean_attitude_update(&alpha);
    let mean_attitude = attitude_minus * mean_rotation - omega * attitude_minus * (0.5 * dt);
    let specific_force_ecef = mean_attitude * specific_force;

    // Gravitation plus centrifugal and Coriolis terms, eq. (5.36) with (2.132)
    let acceleration = specific_force_ecef + gravitation
        - omega * omega * position_minus
        - omega * velocity_minus * 2.0;

    let velocity_plus = velocity_minus + acceleration * dt;
    // Trapezoidal position update, eq. (5.38)
    let position_plus = position_minus + (velocity_plus * 2.0 - acceleration * dt) * (0.5 * dt);

    (position_plus, velocity_plus, attitude_plus)
}

/// Propagate one epoch with WGS 84 and first-order re-orthogonalization
///
/// Returns `(position_plus, velocity_plus, attitude_plus)`.
pub fn propagate(
    position_minus: &Vector3<f64>,
    velocity_minus: &Vector3<f64>,
    attitude_minus: &Matrix3<f64>,
    gravitation: &Vector3<f64>,
    specific_force: &Vector3<f64>,
    angular_rate: &Vector3<f64>,
    dt: f64,
) -> (Vector3<f64>, Vector3<f64>, Matrix3<f64>) {
    propagate_with::<Wgs84>(
        position_minus,
        velocity_minus,
        attitude_minus,
        gravitation,
        specific_force,
        angular_rate,
        dt,
        Normalization::Groves,
    )
}

/// [`propagate`] over the state and measurement types
pub fn propagate_state(
    state: &NavState,
    gravitation: &Vector3<f64>,
    imu: &ImuSample,
    dt: f64,
) -> NavState {
    let (position, velocity, attitude) = propagate(
        &state.position,
        &state.velocity,
        &state.attitude,
        gravitation,
        &imu.specific_force,
        &imu.angular_rate,
        dt,
    );
    NavState::new(position, velocity, attitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EARTH_ROTATION_RATE, EARTH_SEMIMAJOR_AXIS};
    use crate::geodetic::gravitation;
    use crate::geodetic::landmarks::LANDMARKS;
    use crate::math::{normalize_groves, orthogonality_error};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn equator() -> Vector3<f64> {
        Vector3::new(EARTH_SEMIMAJOR_AXIS, 0.0, 0.0)
    }

    #[test]
    fn test_earth_rate_matrix() {
        let omega = earth_rate_matrix::<Wgs84>();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(omega * v, Vector3::z().cross(&v) * EARTH_ROTATION_RATE, epsilon = 1e-20);
    }

    #[test]
    fn test_free_fall_at_equator() {
        let position = equator();
        let g = gravitation(&position);
        assert_relative_eq!(g, Vector3::new(-9.8142, 0.0, 0.0), epsilon = 1e-4);

        let (p, v, c) = propagate(
            &position,
            &Vector3::zeros(),
            &Matrix3::identity(),
            &g,
            &Vector3::zeros(),
            &Vector3::zeros(),
            1.0,
        );

        // Gravitation less the centrifugal term
        let centrifugal = EARTH_ROTATION_RATE * EARTH_ROTATION_RATE * EARTH_SEMIMAJOR_AXIS;
        assert_relative_eq!(v, Vector3::new(g.x + centrifugal, 0.0, 0.0), max_relative = 1e-14);
        assert_relative_eq!(v.x, -9.7803, epsilon = 1e-4);
        assert_relative_eq!(p, position + v * 0.5, max_relative = 1e-15);

        // Only the Earth rotation term touches the attitude
        let expected = normalize_groves(&(Matrix3::identity() - earth_rate_matrix::<Wgs84>()));
        assert_relative_eq!(c, expected, epsilon = 1e-15);
        assert!(orthogonality_error(&c) < 1e-15);
    }

    #[test]
    fn test_rest_at_landmarks() {
        let dt = 1.0;
        let omega = earth_rate_matrix::<Wgs84>();
        for landmark in LANDMARKS {
            let position = landmark.ecef();
            let g = gravitation(&position);
            let state = NavState::at_rest(position);

            let next = propagate_state(&state, &g, &ImuSample::zero(), dt);

            // Zero velocity means no Coriolis contribution
            let acceleration = g - omega * omega * position;
            assert_relative_eq!(next.velocity, acceleration * dt, max_relative = 1e-14);
            assert_relative_eq!(next.position, position + acceleration * (0.5 * dt * dt), max_relative = 1e-15);
        }
    }

    #[test]
    fn test_coriolis_term() {
        let position = equator();
        let velocity = Vector3::new(0.0, 100.0, 0.0);
        let g = Vector3::zeros();
        let omega = earth_rate_matrix::<Wgs84>();

        let (_, v, _) = propagate(
            &position,
            &velocity,
            &Matrix3::identity(),
            &g,
            &Vector3::zeros(),
            &Vector3::zeros(),
            0.1,
        );

        let expected = velocity + (-(omega * omega * position) - omega * velocity * 2.0) * 0.1;
        assert_relative_eq!(v, expected, max_relative = 1e-14);
        // Eastward motion at the equator is pushed outward
        assert!(v.x > 0.0);
    }

    #[test]
    fn test_specific_force_balances_gravity() {
        // A body held at rest senses the reaction to gravity
        let position = equator();
        let g = gravitation(&position);
        let omega = earth_rate_matrix::<Wgs84>();
        let support = -(g - omega * omega * position);

        let (p, v, _) = propagate(
            &position,
            &Vector3::zeros(),
            &Matrix3::identity(),
            &g,
            &support,
            &Vector3::zeros(),
            0.01,
        );

        // The half-step Earth rotation tilt of the mean attitude leaves a tiny residual
        assert_abs_diff_eq!(v, Vector3::zeros(), epsilon = 1e-7);
        assert_abs_diff_eq!(p, position, epsilon = 1e-6);
    }

    #[test]
    fn test_body_rotation() {
        let position = equator();
        let rate = Vector3::new(0.0, 0.0, 0.5);
        let dt = 0.01;

        let (_, _, c) = propagate(
            &position,
            &Vector3::zeros(),
            &Matrix3::identity(),
            &gravitation(&position),
            &Vector3::zeros(),
            &rate,
            dt,
        );

        // Yaw is the body rate less the Earth rate
        let yaw = c[(1, 0)].atan2(c[(0, 0)]);
        assert_relative_eq!(yaw, (rate.z - EARTH_ROTATION_RATE) * dt, epsilon = 1e-9);
        assert!(orthogonality_error(&c) < 1e-12);
    }

    #[test]
    fn test_specific_force_smeared_over_rotation() {
        // Constant body force while yawing: the ECEF force is the average
        // over the interval, not the force at the start attitude
        let position = equator();
        let g = Vector3::zeros();
        let force = Vector3::new(1.0, 0.0, 0.0);
        let rate = Vector3::new(0.0, 0.0, 0.2);
        let dt = 1.0;

        let (_, v, _) = propagate(
            &position,
            &Vector3::zeros(),
            &Matrix3::identity(),
            &g,
            &force,
            &rate,
            dt,
        );

        let angle: f64 = 0.2;
        let mean_force = Vector3::new(angle.sin() / angle, (1.0 - angle.cos()) / angle, 0.0);
        let omega = earth_rate_matrix::<Wgs84>();
        let centrifugal = -(omega * omega * position);
        assert_abs_diff_eq!(v - centrifugal * dt, mean_force * dt, epsilon = 1e-4);
    }

    #[test]
    fn test_time_reversal() {
        let position = LANDMARKS[0].ecef();
        let state = NavState::new(
            position,
            Vector3::new(12.0, -3.0, 0.5),
            crate::math::rotation_exp(&Vector3::new(0.1, -0.2, 0.3)),
        );
        let imu = ImuSample::new(Vector3::new(0.3, -0.1, 9.8), Vector3::new(0.01, 0.02, -0.03));
        let dt = 1e-3;

        let forward = propagate_state(&state, &gravitation(&state.position), &imu, dt);
        let back = propagate_state(&forward, &gravitation(&forward.position), &imu, -dt);

        assert_abs_diff_eq!(back.position, state.position, epsilon = 1e-4);
        assert_abs_diff_eq!(back.velocity, state.velocity, epsilon = 1e-4);
        assert_abs_diff_eq!(back.attitude, state.attitude, epsilon = 1e-6);
    }

    #[test]
    fn test_attitude_stays_orthogonal() {
        let mut state = NavState::at_rest(LANDMARKS[1].ecef());
        let imu = ImuSample::new(Vector3::new(0.0, 0.0, 9.8), Vector3::new(0.3, -0.7, 1.1));

        for _ in 0..10_000 {
            state = propagate_state(&state, &gravitation(&state.position), &imu, 0.01);
        }
        assert!(orthogonality_error(&state.attitude) < 1e-12);
        assert_relative_eq!(state.attitude.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_svd_normalization_variant() {
        let position = equator();
        let g = gravitation(&position);
        let rate = Vector3::new(0.1, 0.2, 0.3);

        let (p1, v1, c1) = propagate(&position, &Vector3::zeros(), &Matrix3::identity(), &g, &Vector3::zeros(), &rate, 0.01);
        let (p2, v2, c2) = propagate_with::<Wgs84>(
            &position,
            &Vector3::zeros(),
            &Matrix3::identity(),
            &g,
            &Vector3::zeros(),
            &rate,
            0.01,
            Normalization::Svd,
        );

        assert_eq!(p1, p2);
        assert_eq!(v1, v2);
        assert_abs_diff_eq!(c1, c2, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_propagates() {
        let (p, v, c) = propagate(
            &equator(),
            &Vector3::zeros(),
            &Matrix3::identity(),
            &Vector3::new(f64::NAN, 0.0, 0.0),
            &Vector3::zeros(),
            &Vector3::zeros(),
            1.0,
        );
        assert!(p.x.is_nan());
        assert!(v.x.is_nan());
        assert!(c.iter().all(|x| x.is_finite()));

        let (_, _, c) = propagate(
            &equator(),
            &Vector3::zeros(),
            &Matrix3::identity(),
            &Vector3::zeros(),
            &Vector3::zeros(),
            &Vector3::new(0.0, f64::INFINITY, 0.0),
            1.0,
        );
        assert!(c.iter().any(|x| x.is_nan()));
    }
}
