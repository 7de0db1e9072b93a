//! Fusion configuration
//!
//! Every tunable of the tick loop in one `Copy` struct. Defaults reproduce
//! the reference firmware; builder methods override single fields and
//! [`validate`](FusionConfig::validate) rejects anything the hot path cannot
//! handle.
//!
//! ```rust
//! use tiltfuse_core::FusionConfig;
//!
//! let config = FusionConfig::default()
//!     .with_trust_factor(0.98)
//!     .with_noise(0.0, 0.5)
//!     .with_report_interval_ms(250);
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::fusion::DENOMINATOR_BIAS_DEFAULT;
use crate::constants::{GRAVITY_MPS2, REPORT_INTERVAL_MS, TRUST_FACTOR_DEFAULT};
use crate::errors::{FusionError, FusionResult};
use crate::fusion::TrustFactor;
use crate::noise::NoiseParameters;

/// Tunables for both fusion pipelines and the tick driver
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FusionConfig {
    /// Weight of the gyroscope path, strictly inside (0, 1)
    pub trust_factor: f32,

    /// Gravity used to normalize accelerometer axes (m/s²)
    pub gravity: f32,

    /// Noise injected into the noisy pipeline
    pub noise: NoiseParameters,

    /// Added to the z term of the noisy inclination estimate only
    pub denominator_bias: f32,

    /// Minimum time between two reports (ms)
    pub report_interval_ms: u32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            trust_factor: TRUST_FACTOR_DEFAULT,
            gravity: GRAVITY_MPS2,
            noise: NoiseParameters::default(),
            denominator_bias: DENOMINATOR_BIAS_DEFAULT,
            report_interval_ms: REPORT_INTERVAL_MS,
        }
    }
}

impl FusionConfig {
    /// Override the trust factor
    pub fn with_trust_factor(mut self, trust_factor: f32) -> Self {
        self.trust_factor = trust_factor;
        self
    }

    /// Override the gravity constant
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Override the injected noise model
    pub fn with_noise(mut self, mean: f32, std_dev: f32) -> Self {
        self.noise = NoiseParameters { mean, std_dev };
        self
    }

    /// Override the noisy pipeline's denominator bias
    pub fn with_denominator_bias(mut self, bias: f32) -> Self {
        self.denominator_bias = bias;
        self
    }

    /// Override the report interval
    pub fn with_report_interval_ms(mut self, interval_ms: u32) -> Self {
        self.report_interval_ms = interval_ms;
        self
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> FusionResult<()> {
        self.trust()?;
        self.noise.validate()?;

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(FusionError::InvalidGravity { value: self.gravity });
        }
        if !self.denominator_bias.is_finite() {
            return Err(FusionError::InvalidBias {
                value: self.denominator_bias,
            });
        }
        if self.report_interval_ms == 0 {
            return Err(FusionError::InvalidReportInterval);
        }
        Ok(())
    }

    /// Trust factor as a validated newtype
    pub fn trust(&self) -> FusionResult<TrustFactor> {
        TrustFactor::new(self.trust_factor)
    }
}
