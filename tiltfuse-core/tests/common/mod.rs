//! Shared fakes and helpers for integration tests
//!
//! Provides:
//! - `TiltRig`: a transport that simulates a board rotating about one axis
//! - `ScriptedImu`: a transport that replays a fixed list of results
//! - `SlowSink`: an output channel that becomes ready after a few polls
//! - `CountingDelay`: a delay that records how long it was asked to wait

#![allow(dead_code)]

pub mod scenarios;

use std::collections::VecDeque;
use std::fmt;

use embedded_hal::delay::DelayNs;
use tiltfuse_core::traits::{ImuTransport, ReportSink};
use tiltfuse_core::types::SensorSample;

/// Assert two floats agree within an absolute tolerance
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        let diff = (actual - expected).abs();
        if !(diff <= $tolerance) {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, $tolerance, expected, diff
            );
        }
    };
}

/// Error raised by the scripted transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Transport that replays queued results, then repeats the fallback sample
pub struct ScriptedImu {
    pub who_am_i: u8,
    pub init_ok: bool,
    pub queue: VecDeque<Result<SensorSample, BusFault>>,
    pub fallback: SensorSample,
    pub reads: usize,
}

impl ScriptedImu {
    pub fn new(fallback: SensorSample) -> Self {
        Self {
            who_am_i: 0x6A,
            init_ok: true,
            queue: VecDeque::new(),
            fallback,
            reads: 0,
        }
    }

    pub fn push(&mut self, result: Result<SensorSample, BusFault>) {
        self.queue.push_back(result);
    }
}

impl ImuTransport for ScriptedImu {
    type Error = BusFault;

    fn read_who_am_i(&mut self) -> Result<u8, BusFault> {
        Ok(self.who_am_i)
    }

    fn initialize(&mut self) -> Result<(), BusFault> {
        if self.init_ok {
            Ok(())
        } else {
            Err(BusFault)
        }
    }

    fn read_sample(&mut self) -> Result<SensorSample, BusFault> {
        self.reads += 1;
        self.queue.pop_front().unwrap_or(Ok(self.fallback))
    }
}

/// Output channel that reports not-ready for the first `polls_until_ready` polls
#[derive(Default)]
pub struct SlowSink {
    pub text: String,
    pub polls_until_ready: u32,
    pub polls: u32,
}

impl fmt::Write for SlowSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl ReportSink for SlowSink {
    fn is_ready(&mut self) -> bool {
        self.polls += 1;
        self.polls > self.polls_until_ready
    }
}

/// Delay that only accumulates the requested time
#[derive(Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
