//! Command implementations.
//!
//! Each command is defined in its own module file.

pub mod calibration;

// Re-export command instances for registry
pub use calibration::{DRY, WET};
