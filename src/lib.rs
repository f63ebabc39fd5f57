//! ECEF Strapdown Inertial Navigation
//!
//! Forward mechanization of position, velocity and attitude in the
//! Earth-centered Earth-fixed frame from specific force and angular rate
//! measurements, together with the WGS 84 gravitation model and the SO(3)
//! rotation utilities it is built on.
//!
//! The numerical core is a set of pure functions over nalgebra fixed-size
//! types; [`Navigator`] is an optional stateful wrapper with input checks.

pub mod core;
pub mod math;
pub mod geodetic;
pub mod mechanization;
pub mod validation;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{GeodeticModel, ImuSample, NavState, Wgs84};
pub use math::{normalize_groves, rotation_exp, so3, Normalization};
pub use geodetic::{geodetic_to_ecef, gravitation, try_gravitation};
pub use mechanization::{propagate, propagate_state, propagate_with, Navigator};
pub use validation::{NavigationError, Result};
pub use utils::{ConfigError, NavigatorConfig};
