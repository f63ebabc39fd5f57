//! Geodetic models: gravitation and frame transforms

pub mod gravitation;
pub mod frame_transform;

#[cfg(test)]
pub(crate) mod landmarks;

pub use gravitation::{gravitation, gravitation_ecef, try_gravitation};
pub use frame_transform::{geodetic_to_ecef, geodetic_to_ecef_with};
