//! Time-Related Constants
//!
//! Unit conversions and the cadence of the tick driver.

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Milliseconds per second as a float, for elapsed-time conversion.
pub const MS_PER_SECOND_F32: f32 = 1000.0;

/// Minimum time between two reports on the output sink (milliseconds).
///
/// The tick loop itself runs as fast as the transport allows; only the
/// report is throttled.
pub const REPORT_INTERVAL_MS: u32 = 1000;

/// Poll interval while waiting for the output sink to become ready (milliseconds).
pub const READY_POLL_INTERVAL_MS: u32 = 10;
