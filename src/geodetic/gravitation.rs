//! Earth gravitation in the ECEF frame
//!
//! Point gravitation of an oblate Earth truncated at the J2 zonal harmonic,
//! eq. (2.142) in Groves. Centrifugal acceleration is *not* included; the
//! mechanization applies it through the Earth-rate terms.

use nalgebra::Vector3;

use crate::core::{GeodeticModel, Wgs84};
use crate::validation::data::{ensure_finite_vector, MIN_RADIUS_SQUARED};
use crate::validation::{NavigationError, Result};

/// Gravitation at an ECEF position (m) for the given Earth model (m/s^2)
///
/// The zero vector divides by zero and yields a non-finite result; use
/// [`try_gravitation`] when the position is not known to be valid.
pub fn gravitation_ecef<M: GeodeticModel>(position: &Vector3<f64>) -> Vector3<f64> {
    let inv_r2 = 1.0 / position.norm_squared();
    let z_term = 5.0 * position.z * position.z * inv_r2;
    let j2_term = 1.5 * M::DYNAMICAL_J2 * M::SEMIMAJOR_AXIS * M::SEMIMAJOR_AXIS * inv_r2;
    let scale = -inv_r2 * inv_r2.sqrt() * M::GRAVITATIONAL_PARAMETER;

    let oblate = Vector3::new(1.0 - z_term, 1.0 - z_term, 3.0 - z_term).component_mul(position);
    (position + oblate * j2_term) * scale
}

/// WGS 84 gravitation at an ECEF position
pub fn gravitation(position: &Vector3<f64>) -> Vector3<f64> {
    gravitation_ecef::<Wgs84>(position)
}

/// WGS 84 gravitation, rejecting positions at the Earth's center and
/// non-finite input
pub fn try_gravitation(position: &Vector3<f64>) -> Result<Vector3<f64>> {
    ensure_finite_vector("position", position)?;

    let radius_squared = position.norm_squared();
    if radius_squared < MIN_RADIUS_SQUARED {
        return Err(NavigationError::SingularPosition { radius_squared });
    }
    Ok(gravitation(position))
}
