//! Output Sink Abstraction
//!
//! The firmware writes human-readable text: startup diagnostics and the
//! once-per-second angle report. Any [`core::fmt::Write`] can carry that text;
//! `ReportSink` adds the one extra capability the startup handshake needs,
//! asking whether the channel is ready yet (a USB CDC port that has not been
//! opened by the host, for example).

use core::fmt::Write;

/// Text output channel for diagnostics and periodic reports
pub trait ReportSink: Write {
    /// Whether the channel can accept output
    ///
    /// Polled during startup until it returns `true`.
    fn is_ready(&mut self) -> bool {
        true
    }
}

impl<const N: usize> ReportSink for heapless::String<N> {}

#[cfg(feature = "std")]
impl ReportSink for std::string::String {}

impl<W: ReportSink + ?Sized> ReportSink for &mut W {
    fn is_ready(&mut self) -> bool {
        (**self).is_ready()
    }
}
