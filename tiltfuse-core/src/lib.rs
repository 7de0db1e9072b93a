//! Complementary-filter tilt estimation for 6-axis IMUs
//!
//! Reads accelerometer and gyroscope samples, fuses them into roll and pitch,
//! and runs a second, identical pipeline on the same samples corrupted with
//! synthetic Gaussian noise so the filter's robustness can be compared live.
//!
//! Key constraints:
//! - No heap allocation anywhere in the crate
//! - No globals: all persistent state lives in [`TickDriver`]
//! - Hardware, clock, output and randomness are injected
//!
//! ```no_run
//! use tiltfuse_core::{FusionConfig, TickDriver};
//! use tiltfuse_core::noise::XorShift32;
//! use tiltfuse_core::time::FixedTime;
//! # use tiltfuse_core::traits::ImuTransport;
//! # use tiltfuse_core::types::SensorSample;
//! # struct Board;
//! # impl ImuTransport for Board {
//! #     type Error = ();
//! #     fn read_who_am_i(&mut self) -> Result<u8, ()> { Ok(0x6A) }
//! #     fn initialize(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn read_sample(&mut self) -> Result<SensorSample, ()> { Ok(SensorSample::level(9.8)) }
//! # }
//! # struct NoDelay;
//! # impl embedded_hal::delay::DelayNs for NoDelay { fn delay_ns(&mut self, _: u32) {} }
//!
//! let clock = FixedTime::new(0);
//! let out: heapless::String<256> = heapless::String::new();
//! let mut driver = TickDriver::new(Board, &clock, out, XorShift32::new(7), FusionConfig::default())
//!     .expect("default config is valid");
//!
//! driver.startup(&mut NoDelay);
//! driver.run();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod driver;
pub mod errors;
pub mod fusion;
pub mod noise;
pub mod report;
pub mod tick;
pub mod time;
pub mod traits;
pub mod types;

// Public API
pub use config::FusionConfig;
pub use errors::{FusionError, FusionResult};
pub use fusion::{ComplementaryFilter, FusionPipeline, TrustFactor};
pub use noise::{GaussianNoise, NoiseParameters, XorShift32};
pub use report::Report;
pub use tick::{TickContext, TickDriver, TickOutcome};
pub use types::{AngleEstimate, GyroDelta, Orientation, SensorSample};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
