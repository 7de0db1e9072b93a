//! Core Traits and Abstractions for TiltFuse
//!
//! The fusion math is pure; everything it touches on a real board comes in
//! through one of these traits, so the tick driver can run against fakes on
//! a host.
//!
//! ## Module Organization
//!
//! - [`transport`] - IMU bus access ([`ImuTransport`])
//! - [`time`] - millisecond clock ([`TimeSource`])
//! - [`report`] - text output channel ([`ReportSink`])
//!
//! Delay and randomness use the ecosystem traits directly:
//! `embedded_hal::delay::DelayNs` and `rand_core::RngCore`.
//!
//! ## Usage Example
//!
//! ```rust
//! use tiltfuse_core::traits::{ImuTransport, TimeSource, ReportSink};
//!
//! fn poll_once<T, C, W>(imu: &mut T, clock: &C, out: &mut W)
//! where
//!     T: ImuTransport,
//!     C: TimeSource,
//!     W: ReportSink,
//! {
//!     if let Ok(sample) = imu.read_sample() {
//!         let _ = writeln!(out, "{} ms: az = {}", clock.now(), sample.accel.z);
//!     }
//! }
//! ```

pub mod report;
pub mod time;
pub mod transport;

pub use report::ReportSink;
pub use time::TimeSource;
pub use transport::ImuTransport;
