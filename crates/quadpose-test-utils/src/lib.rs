//! Shared test fixtures and utilities for quadpose crates.
//!
//! Provides standard robot geometries, stock foot targets, and frame
//! comparison helpers.

pub mod configs;
pub mod frames;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use configs::{default_config, long_hip_config, nominal_targets, power_off_targets};
pub use frames::{assert_frame_eq, assert_vec_eq, sample_frame, vec3};
