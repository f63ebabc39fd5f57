//! Rotation utilities on SO(3) and its Lie algebra so(3)
//!
//! Everything here is a pure function over fixed-size nalgebra types:
//! - so(3) hat/vee maps
//! - matrix exponential from a rotation vector (sinc form, no branching)
//! - first-order symmetric and SVD re-orthogonalization
//! - quaternion to rotation matrix
//! - mean attitude ("smear") operator for specific-force integration
//!
//! References are to Groves, Principles of GNSS, Inertial, and Multisensor
//! Integrated Navigation Systems, 2nd ed.

use nalgebra::{Matrix3, RowVector3, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Rotation magnitude below which the mean attitude operator is the identity
pub const SMALL_ANGLE_THRESHOLD: f64 = 1e-10;

/// Method used to pull a drifting attitude matrix back onto SO(3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// First-order symmetric correction, see [`normalize_groves`]
    #[default]
    Groves,
    /// Nearest orthogonal matrix, see [`normalize_svd`]
    Svd,
}

impl Normalization {
    pub fn apply(&self, r: &Matrix3<f64>) -> Matrix3<f64> {
        match self {
            Normalization::Groves => normalize_groves(r),
            Normalization::Svd => normalize_svd(r),
        }
    }
}

/// Normalized sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Vector to skew-symmetric matrix, so that `so3(a) * b == a.cross(&b)`
pub fn so3(x: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -x.z, x.y,
        x.z, 0.0, -x.x,
        -x.y, x.x, 0.0,
    )
}

/// Skew-symmetric matrix back to its vector; reads entries (2,1), (0,2), (1,0)
pub fn vee(m: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(m[(2, 1)], m[(0, 2)], m[(1, 0)])
}

/// Matrix exponential of a rotation vector (Rodrigues form)
///
/// `R = I + sinc(|x|/pi) * X + 0.5 * sinc(|x|/(2 pi))^2 * X^2` with `X = so3(x)`.
/// Writing both coefficients through the normalized sinc keeps the function
/// analytic at the origin, so no small-angle branch is required.
/// See eq. (5.73) in Groves.
pub fn rotation_exp(x: &Vector3<f64>) -> Matrix3<f64> {
    let angle = x.norm() / PI;
    let f1 = sinc(angle);
    let f2 = 0.5 * sinc(0.5 * angle).powi(2);
    let omega = so3(x);
    Matrix3::identity() + omega * f1 + omega * omega * f2
}

/// Re-orthogonalize using Groves' first-order correction
///
/// The cross-coupling between each pair of rows is split evenly between the
/// two rows. All three corrections use the input rows, not rows already
/// corrected, and each row is then scaled to unit length. Only valid for
/// small departures from orthogonality; a zero row yields non-finite output.
pub fn normalize_groves(r: &Matrix3<f64>) -> Matrix3<f64> {
    let r0 = r.row(0).into_owned();
    let r1 = r.row(1).into_owned();
    let r2 = r.row(2).into_owned();

    let d01 = r0.dot(&r1);
    let d02 = r0.dot(&r2);
    let d12 = r1.dot(&r2);

    let n0 = r0 - r1 * (0.5 * d01) - r2 * (0.5 * d02);
    let n1 = r1 - r0 * (0.5 * d01) - r2 * (0.5 * d12);
    let n2 = r2 - r0 * (0.5 * d02) - r1 * (0.5 * d12);

    Matrix3::from_rows(&[unit_row(&n0), unit_row(&n1), unit_row(&n2)])
}

fn unit_row(row: &RowVector3<f64>) -> RowVector3<f64> {
    row / row.norm()
}

/// Nearest orthogonal matrix, `U * V^T` from the SVD of `r`
pub fn normalize_svd(r: &Matrix3<f64>) -> Matrix3<f64> {
    let svd = r.svd(true, true);
    match (svd.u, svd.v_t) {
        (Some(u), Some(v_t)) => u * v_t,
        _ => *r,
    }
}

/// Scalar-first quaternion `[w, x, y, z]` to rotation matrix
///
/// The quaternion does not have to be unit length. Eq. (117) in Sola,
/// Quaternion kinematics for the error-state Kalman filter.
pub fn quaternion_to_rotation(q: &Vector4<f64>) -> Matrix3<f64> {
    let qwt = 1.0 / q.norm();
    let qs = qwt * q[0];
    let qv = Vector3::new(q[1], q[2], q[3]) * qwt;

    Matrix3::identity() * (qs * qs - qv.dot(&qv))
        + qv * qv.transpose() * 2.0
        + so3(&qv) * (2.0 * qs)
}

/// Mean body rotation over an interval with constant angular rate
///
/// Averages the body-frame rotation across the interval so that specific
/// force is resolved at the mean attitude, eq. (5.84) in Groves. Both
/// coefficients are 0/0 at the origin, hence the identity below
/// [`SMALL_ANGLE_THRESHOLD`].
pub fn mean_attitude_update(alpha: &Vector3<f64>) -> Matrix3<f64> {
    let alpha_norm = alpha.norm();
    if alpha_norm > SMALL_ANGLE_THRESHOLD {
        let alpha_cross = so3(alpha);
        let norm2 = alpha_norm * alpha_norm;
        Matrix3::identity()
            + alpha_cross * ((1.0 - alpha_norm.cos()) / norm2)
            + alpha_cross * alpha_cross * ((1.0 - alpha_norm.sin() / alpha_norm) / norm2)
    } else {
        Matrix3::identity()
    }
}

/// Largest absolute element of `R * R^T - I`; zero for an orthogonal matrix
pub fn orthogonality_error(r: &Matrix3<f64>) -> f64 {
    (r * r.transpose() - Matrix3::identity()).amax()
}
