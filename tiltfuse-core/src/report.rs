//! Periodic angle report
//!
//! Once per report interval the tick driver writes the four fused angles to
//! the output sink. The layout is kept byte-compatible with existing log
//! consumers: two decimals per value, clean pitch/roll on the first line and
//! noisy pitch/roll on the second, the second line starting with the
//! separator left over from the first.
//!
//! ```text
//! 1.23, -0.45\r\n
//! , 1.31, -0.52\r\n
//! ```
//!
//! No labels are written; position is the only key. Consumers that want one
//! record per report reassemble the two lines (see `tiltfuse-host`).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Orientation;

/// The four values emitted once per report interval
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// Fused orientation of the clean pipeline
    pub clean: Orientation,
    /// Fused orientation of the noisy pipeline
    pub noisy: Orientation,
}

impl Report {
    /// Build a report from the two pipeline states
    pub fn new(clean: Orientation, noisy: Orientation) -> Self {
        Self { clean, noisy }
    }

    /// Values in wire order: clean pitch, clean roll, noisy pitch, noisy roll
    pub fn values(&self) -> [f32; 4] {
        [
            self.clean.pitch,
            self.clean.roll,
            self.noisy.pitch,
            self.noisy.roll,
        ]
    }
}

/// Drop the sign of negative zero so it prints as "0.00"
#[inline]
fn unsigned_zero(value: f32) -> f32 {
    value + 0.0
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [clean_pitch, clean_roll, noisy_pitch, noisy_roll] = self.values().map(unsigned_zero);
        write!(f, "{:.2}, {:.2}\r\n", clean_pitch, clean_roll)?;
        write!(f, ", {:.2}, {:.2}\r\n", noisy_pitch, noisy_roll)
    }
}
