//! Time Source Abstraction for Embedded Systems
//!
//! The tick driver never reads a hardware timer directly. It asks a
//! `TimeSource`, which on a board wraps the HAL's millisecond counter and in
//! tests is a [`FixedTime`](crate::time::FixedTime) the test moves by hand.
//!
//! ## Implementation Requirements
//!
//! - `now()` must be monotonically non-decreasing apart from the wrap at
//!   `u32::MAX`
//! - Wrap must happen at exactly `u32::MAX`, because elapsed time is computed
//!   with `u32::wrapping_sub`
//!
//! ## Example Implementation
//!
//! ```rust
//! use tiltfuse_core::traits::TimeSource;
//! use tiltfuse_core::time::Timestamp;
//!
//! struct TickCounter {
//!     ticks: u32, // incremented by a 1 kHz timer interrupt
//! }
//!
//! impl TimeSource for TickCounter {
//!     fn now(&self) -> Timestamp {
//!         self.ticks
//!     }
//! }
//! ```

use crate::time::Timestamp;

/// Monotonic millisecond counter
pub trait TimeSource {
    /// Current counter value in milliseconds
    fn now(&self) -> Timestamp;

    /// Smallest interval this source can resolve, in milliseconds
    fn precision_ms(&self) -> u32 {
        1
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn precision_ms(&self) -> u32 {
        (**self).precision_ms()
    }
}
