//! Geodetic to ECEF position conversion

use nalgebra::Vector3;

use crate::core::{GeodeticModel, Wgs84, DEGREES};

/// Convert `[latitude (deg), longitude (deg), height (m)]` to ECEF (m)
///
/// Eq. (4.A.2) in Misra & Enge, Global Positioning System. Since `e^2 << 1`
/// the prime vertical radius never divides by zero.
pub fn geodetic_to_ecef_with<M: GeodeticModel>(llh: &Vector3<f64>) -> Vector3<f64> {
    let phi = llh.x * DEGREES;
    let lambda = llh.y * DEGREES;
    let h = llh.z;

    let e2 = M::eccentricity_squared();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    // Prime vertical radius of curvature
    let n = M::SEMIMAJOR_AXIS / (1.0 - e2 * sin_phi * sin_phi).sqrt();

    Vector3::new(
        (n + h) * cos_phi * cos_lambda,
        (n + h) * cos_phi * sin_lambda,
        (n * (1.0 - e2) + h) * sin_phi,
    )
}

/// WGS 84 geodetic to ECEF conversion
pub fn geodetic_to_ecef(llh: &Vector3<f64>) -> Vector3<f64> {
    geodetic_to_ecef_with::<Wgs84>(llh)
}
