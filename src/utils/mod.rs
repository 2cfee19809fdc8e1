//! Utility modules for common functionality.
//!
//! - constants: Reserved identifiers, default paths and environment variable names
//! - logging: Logging setup

pub mod constants;
pub mod logging;

pub use constants::*;
