//! Complementary Sensor Fusion for Tilt Estimation
//!
//! ## Overview
//!
//! Roll and pitch come from two imperfect sources:
//!
//! | Source | Strength | Weakness |
//! |--------|----------|----------|
//! | Gyroscope integral | smooth, fast | drifts without bound |
//! | Accelerometer inclination | drift-free | noisy, disturbed by motion |
//!
//! A complementary filter trusts the gyroscope over short horizons and the
//! accelerometer over long ones:
//! ```text
//! fused = (fused ± rate·dt) · t + accel_angle · (1 − t)
//! ```
//!
//! ## Modules
//!
//! - [`inclination`]: gravity vector to roll/pitch
//! - [`gyro`]: angular rate to per-tick delta
//! - [`complementary`]: the blend and its trust factor
//! - [`pipeline`]: one of each bound to a persistent state
//!
//! ## Usage Example
//!
//! ```rust
//! use tiltfuse_core::fusion::FusionPipeline;
//! use tiltfuse_core::types::{Acceleration, AngularRate, SensorSample};
//! use tiltfuse_core::FusionConfig;
//!
//! let config = FusionConfig::default();
//! let mut clean = FusionPipeline::clean(&config).unwrap();
//!
//! let sample = SensorSample::new(
//!     Acceleration::new(0.0, 0.0, 9.8),
//!     AngularRate::new(0.1, 0.0),
//! );
//! let fused = clean.step(&sample, 0.01);
//! assert!(fused.roll > 0.0);
//! ```

pub mod complementary;
pub mod gyro;
pub mod inclination;
pub mod pipeline;

pub use complementary::{ComplementaryFilter, TrustFactor};
pub use pipeline::FusionPipeline;
