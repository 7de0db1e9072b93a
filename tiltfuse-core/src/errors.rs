//! Error Types for Fusion Configuration
//!
//! ## Design Philosophy
//!
//! The tick loop itself never fails: numeric hazards are removed structurally
//! (epsilon clamp in the noise transform, epsilon bias in the noisy
//! inclination denominator) and transport failures are reported and then
//! ignored. Errors therefore only exist at the edges:
//!
//! 1. **Configuration**: a trust factor outside (0, 1), a non-finite noise
//!    model, a zero gravity constant. These are rejected when the
//!    configuration is built so the hot path can assume valid parameters.
//!
//! 2. **Transport**: bus failures surface through the associated error type
//!    of [`ImuTransport`](crate::traits::ImuTransport). The LSM6DSL driver
//!    uses [`DriverError`](crate::driver::DriverError).
//!
//! Like the rest of the core these errors are `Copy`, carry only inline data
//! and `&'static str` messages, and never allocate.
//!
//! ```rust
//! use tiltfuse_core::{FusionConfig, FusionError};
//!
//! let config = FusionConfig::default().with_trust_factor(1.5);
//! match config.validate() {
//!     Err(FusionError::InvalidTrustFactor { value }) => assert_eq!(value, 1.5),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for fusion configuration
pub type FusionResult<T> = Result<T, FusionError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FusionError {
    /// Trust factor must lie strictly between 0 and 1
    #[error("Trust factor {value} outside open interval (0, 1)")]
    InvalidTrustFactor {
        /// The rejected value
        value: f32,
    },

    /// Noise parameters must be finite with a non-negative standard deviation
    #[error("Invalid noise model: mean {mean}, std dev {std_dev}")]
    InvalidNoise {
        /// Requested mean
        mean: f32,
        /// Requested standard deviation
        std_dev: f32,
    },

    /// Gravity must be finite and strictly positive
    #[error("Invalid gravity constant {value}")]
    InvalidGravity {
        /// The rejected value
        value: f32,
    },

    /// Denominator bias must be finite
    #[error("Invalid denominator bias {value}")]
    InvalidBias {
        /// The rejected value
        value: f32,
    },

    /// Report interval of zero would emit on every tick
    #[error("Report interval must be non-zero")]
    InvalidReportInterval,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FusionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidTrustFactor { value } =>
                defmt::write!(fmt, "Trust factor {} outside (0, 1)", value),
            Self::InvalidNoise { mean, std_dev } =>
                defmt::write!(fmt, "Invalid noise: mean {}, std {}", mean, std_dev),
            Self::InvalidGravity { value } =>
                defmt::write!(fmt, "Invalid gravity {}", value),
            Self::InvalidBias { value } =>
                defmt::write!(fmt, "Invalid bias {}", value),
            Self::InvalidReportInterval =>
                defmt::write!(fmt, "Report interval must be non-zero"),
        }
    }
}
