//! Physical constants and geodetic model parameters
//!
//! WGS 84 values follow NGA.STND.0036. Published values differ slightly
//! between authors, and results (gravitation in particular) are sensitive to
//! the retained precision, so the constants here are kept at full precision.

use std::f64::consts::PI;

/// Multiplicatively converts degrees to radians
pub const DEGREES: f64 = PI / 180.0;

/// Semi-major axis `a` (m), WGS 84 defining parameter
pub const EARTH_SEMIMAJOR_AXIS: f64 = 6378137.0;

/// Inverse flattening `1/f`, WGS 84 defining parameter
pub const EARTH_INVERSE_FLATTENING: f64 = 298.257223563;

/// Earth gravitational parameter `GM` (m^3/s^2), WGS 84 defining parameter
pub const EARTH_GRAVITATIONAL_PARAMETER: f64 = 3.986004418e14;

/// Mean angular velocity of the Earth (rad/s)
///
/// Carries the extra precision of the IAU/GRS 67 value rather than the
/// four-digit WGS 84 defining parameter.
pub const EARTH_ROTATION_RATE: f64 = 7.2921151467e-5;

/// Dynamical form factor `J2` (derived parameter)
pub const EARTH_DYNAMICAL_J2: f64 = 1.082629821313e-3;

/// Semi-minor axis `b = a(1 - f)` (m)
pub const EARTH_SEMIMINOR_AXIS: f64 =
    EARTH_SEMIMAJOR_AXIS * (1.0 - 1.0 / EARTH_INVERSE_FLATTENING);

/// First eccentricity squared `e^2 = 2f - f^2`
pub const EARTH_ECCENTRICITY_SQUARED: f64 = 2.0 / EARTH_INVERSE_FLATTENING
    - 1.0 / (EARTH_INVERSE_FLATTENING * EARTH_INVERSE_FLATTENING);

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299792458.0;

/// Earth model consumed by the gravitation, frame and mechanization code.
///
/// Implemented by zero-sized marker types so the model is fixed at compile
/// time; nothing here is runtime configurable.
pub trait GeodeticModel {
    /// Semi-major axis (m)
    const SEMIMAJOR_AXIS: f64;
    /// Inverse flattening
    const INVERSE_FLATTENING: f64;
    /// Gravitational parameter GM (m^3/s^2)
    const GRAVITATIONAL_PARAMETER: f64;
    /// Rotation rate about the ECEF z-axis (rad/s)
    const ROTATION_RATE: f64;
    /// Second degree zonal harmonic
    const DYNAMICAL_J2: f64;

    /// Flattening `f`
    fn flattening() -> f64 {
        1.0 / Self::INVERSE_FLATTENING
    }

    /// First eccentricity squared
    fn eccentricity_squared() -> f64 {
        let f = Self::flattening();
        2.0 * f - f * f
    }
}

/// World Geodetic System 1984
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wgs84;

impl GeodeticModel for Wgs84 {
    const SEMIMAJOR_AXIS: f64 = EARTH_SEMIMAJOR_AXIS;
    const INVERSE_FLATTENING: f64 = EARTH_INVERSE_FLATTENING;
    const GRAVITATIONAL_PARAMETER: f64 = EARTH_GRAVITATIONAL_PARAMETER;
    const ROTATION_RATE: f64 = EARTH_ROTATION_RATE;
    const DYNAMICAL_J2: f64 = EARTH_DYNAMICAL_J2;
}
