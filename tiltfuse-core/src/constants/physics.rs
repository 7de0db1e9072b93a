//! Physical Constants for TiltFuse
//!
//! Values used to turn raw accelerations into inclination angles.

/// Gravitational acceleration used to normalize accelerometer axes (m/s²).
///
/// The firmware normalizes with a rounded value rather than standard gravity.
/// Because both atan2 arguments are divided by the same constant the clean
/// angles do not depend on it; it only scales the epsilon bias applied to the
/// noisy pipeline's denominator.
pub const GRAVITY_MPS2: f32 = 9.8;

/// Standard gravity (m/s²).
///
/// Used by the LSM6DSL driver to convert milli-g readings to m/s².
///
/// Source: CGPM 1901, 9.80665 m/s²
pub const STANDARD_GRAVITY_MPS2: f32 = 9.80665;

/// Radians to degrees conversion factor.
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Degrees to radians conversion factor.
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
