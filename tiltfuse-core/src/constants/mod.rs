//! Constants for TiltFuse Core
//!
//! Centralized, documented constants used by the fusion core, the noise model,
//! the tick driver and the LSM6DSL transport. Every numeric default lives here
//! so the algorithm modules stay free of magic numbers.
//!
//! ## Organization
//!
//! - **Physics**: gravity and angle conversion
//! - **Fusion**: trust factor, epsilon guards, noise defaults
//! - **Time**: unit conversions and reporting cadence
//! - **Sensors**: LSM6DSL register map and scale factors

/// Physical constants used by the inclination estimator.
pub mod physics;

/// Complementary filter and noise model parameters.
pub mod fusion;

/// Time unit conversions and tick driver cadence.
pub mod time;

/// LSM6DSL register addresses, identification values and scale factors.
pub mod sensors;

// Re-export commonly used constants for convenience
pub use physics::{GRAVITY_MPS2, RAD_TO_DEG};

pub use fusion::{
    TRUST_FACTOR_DEFAULT, EPSILON, NOISE_MEAN_DEFAULT, NOISE_STD_DEV_DEFAULT,
};

pub use time::{MS_PER_SECOND, REPORT_INTERVAL_MS, READY_POLL_INTERVAL_MS};

pub use sensors::{LSM6DSL_WHO_AM_I_VALUE, LSM6DSL_WHO_AM_I_REG};
