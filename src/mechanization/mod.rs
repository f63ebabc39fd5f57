//! Inertial state propagation

pub mod ecef;
pub mod navigator;

pub use ecef::{earth_rate_matrix, propagate, propagate_state, propagate_with};
pub use navigator::Navigator;
