//! Core types and constants for the inertial navigation system

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
