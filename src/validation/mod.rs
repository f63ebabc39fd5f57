//! Input validation and error reporting

pub mod data;
pub mod error;

pub use error::{NavigationError, Result};
