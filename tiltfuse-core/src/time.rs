//! Time management for the tick loop
//!
//! The firmware's only notion of time is a free-running millisecond counter
//! that wraps at `u32::MAX` (about 49.7 days). Every interval is computed with
//! wrapping subtraction so a wrap between two ticks still yields the right
//! small positive difference.

use core::cell::Cell;

use crate::constants::time::MS_PER_SECOND_F32;
use crate::traits::TimeSource;

/// Timestamp in milliseconds since boot, wrapping at `u32::MAX`
pub type Timestamp = u32;

/// Milliseconds between two counter readings, tolerant of one wrap
#[inline]
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u32 {
    later.wrapping_sub(earlier)
}

/// Seconds between two counter readings, tolerant of one wrap
#[inline]
pub fn elapsed_seconds(earlier: Timestamp, later: Timestamp) -> f32 {
    elapsed_ms(earlier, later) as f32 / MS_PER_SECOND_F32
}

/// Settable clock for tests and host-side simulation
///
/// Interior mutability lets a test keep a shared reference to the clock
/// while the tick driver owns `&FixedTime` as its time source.
#[derive(Debug, Default)]
pub struct FixedTime {
    timestamp: Cell<Timestamp>,
}

impl FixedTime {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: Cell::new(timestamp),
        }
    }

    /// Jump to an absolute timestamp
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms`, wrapping like the hardware counter
    pub fn advance(&self, ms: u32) {
        self.timestamp.set(self.timestamp.get().wrapping_add(ms));
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}

/// Monotonic clock backed by `std::time::Instant`, for host builds
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        // Truncation reproduces the 32-bit counter wrap
        self.start.elapsed().as_millis() as Timestamp
    }
}
