//! Fixed-cycle tick driver
//!
//! Owns everything that persists across ticks: the two fused orientations
//! (inside their [`FusionPipeline`]s) and the [`TickContext`] timestamps.
//! Hardware access comes in through injected collaborators, so the whole loop
//! runs deterministically on a host against a fake transport and a
//! [`FixedTime`](crate::time::FixedTime) clock.
//!
//! ## One tick
//!
//! ```text
//! read_sample ─► dt = now − prev ─► corrupt ─► clean.step(sample, dt)
//!                                          └► noisy.step(noisy, dt)
//!                                  ─► if now − last_report >= interval: report
//! ```
//!
//! The clock is read once per tick; the same reading feeds the elapsed time
//! and the report cadence check.
//!
//! ## Failure model
//!
//! - `initialize` failure at startup is printed and logged, then ignored.
//!   The loop runs anyway and produces meaningless angles.
//! - A failed `read_sample` is returned from [`tick`](TickDriver::tick)
//!   without touching any state; the next good tick integrates over the whole
//!   gap. [`run`](TickDriver::run) logs it and keeps going.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use rand_core::RngCore;

use crate::config::FusionConfig;
use crate::constants::{LSM6DSL_WHO_AM_I_VALUE, READY_POLL_INTERVAL_MS};
use crate::errors::FusionResult;
use crate::fusion::FusionPipeline;
use crate::noise::GaussianNoise;
use crate::report::Report;
use crate::time::{elapsed_ms, elapsed_seconds, Timestamp};
use crate::traits::{ImuTransport, ReportSink, TimeSource};
use crate::types::Orientation;

/// Timestamps carried from one tick to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickContext {
    /// Clock reading of the previous successful tick
    pub prev_tick_ms: Timestamp,
    /// Clock reading when the last report was written
    pub last_report_ms: Timestamp,
}

impl TickContext {
    /// Both timestamps set to `now`
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            prev_tick_ms: now,
            last_report_ms: now,
        }
    }
}

/// What a successful tick produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Seconds integrated this tick
    pub elapsed_s: f32,
    /// Clean pipeline after this tick
    pub clean: Orientation,
    /// Noisy pipeline after this tick
    pub noisy: Orientation,
    /// Report written this tick, if the interval had elapsed
    pub report: Option<Report>,
}

/// Result of the startup sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupStatus {
    /// WHO_AM_I value, if the probe transfer succeeded
    pub who_am_i: Option<u8>,
    /// Whether `initialize` succeeded
    pub initialized: bool,
}

/// The polling loop
pub struct TickDriver<T, C, W, R> {
    transport: T,
    clock: C,
    sink: W,
    noise: GaussianNoise<R>,
    clean: FusionPipeline,
    noisy: FusionPipeline,
    context: TickContext,
    report_interval_ms: u32,
}

impl<T, C, W, R> TickDriver<T, C, W, R>
where
    T: ImuTransport,
    C: TimeSource,
    W: ReportSink,
    R: RngCore,
{
    /// Build a driver; both pipelines start at (0, 0)
    ///
    /// The tick context is seeded from the clock here and again at the end
    /// of [`startup`](Self::startup).
    pub fn new(transport: T, clock: C, sink: W, rng: R, config: FusionConfig) -> FusionResult<Self> {
        config.validate()?;
        let clean = FusionPipeline::clean(&config)?;
        let noisy = FusionPipeline::noisy(&config)?;
        let context = TickContext::starting_at(clock.now());

        Ok(Self {
            transport,
            clock,
            sink,
            noise: GaussianNoise::with_params(rng, config.noise),
            clean,
            noisy,
            context,
            report_interval_ms: config.report_interval_ms,
        })
    }

    /// Wait for the sink, probe and bring up the sensor
    ///
    /// Never fails: a dead sensor is reported on the sink and in the log.
    pub fn startup<D: DelayNs>(&mut self, delay: &mut D) -> StartupStatus {
        while !self.sink.is_ready() {
            delay.delay_ms(READY_POLL_INTERVAL_MS);
        }

        // Sink write errors have nowhere to go; the loop carries on regardless
        let _ = write!(self.sink, "Testing IMU!\r\n");
        let _ = write!(self.sink, "Testing SPI communication...\r\n");

        let who_am_i = match self.transport.read_who_am_i() {
            Ok(value) => {
                let _ = write!(
                    self.sink,
                    "WHO_AM_I register value: 0x{:02X} (Should be 0x{:02X})\r\n",
                    value, LSM6DSL_WHO_AM_I_VALUE
                );
                log_info!("WHO_AM_I = {:#x}", value);
                Some(value)
            }
            Err(_err) => {
                let _ = write!(self.sink, "WHO_AM_I read failed\r\n");
                #[cfg(feature = "log")]
                log::warn!("WHO_AM_I read failed: {:?}", _err);
                None
            }
        };

        let _ = write!(self.sink, "Attempting to initialize LSM6DSL...\r\n");
        let initialized = match self.transport.initialize() {
            Ok(()) => {
                let _ = write!(self.sink, "IMU initialized successfully\r\n");
                log_info!("IMU initialized");
                true
            }
            Err(_err) => {
                let _ = write!(self.sink, "Failed to find LSM6DSL chip\r\n");
                #[cfg(feature = "log")]
                log::warn!("IMU initialization failed, continuing: {:?}", _err);
                #[cfg(all(feature = "defmt", not(feature = "log")))]
                defmt::warn!("IMU initialization failed, continuing");
                false
            }
        };

        self.context = TickContext::starting_at(self.clock.now());
        StartupStatus { who_am_i, initialized }
    }

    /// Run one cycle
    pub fn tick(&mut self) -> Result<TickOutcome, T::Error> {
        let sample = self.transport.read_sample()?;

        let now = self.clock.now();
        let elapsed_s = elapsed_seconds(self.context.prev_tick_ms, now);
        self.context.prev_tick_ms = now;

        let noisy_sample = self.noise.corrupt(&sample);
        let clean = self.clean.step(&sample, elapsed_s);
        let noisy = self.noisy.step(&noisy_sample, elapsed_s);

        let report = if elapsed_ms(self.context.last_report_ms, now) >= self.report_interval_ms {
            let report = Report::new(clean, noisy);
            let _ = write!(self.sink, "{}", report);
            self.context.last_report_ms = now;
            log_debug!("report written at {} ms", now);
            Some(report)
        } else {
            None
        };

        Ok(TickOutcome {
            elapsed_s,
            clean,
            noisy,
            report,
        })
    }

    /// Tick forever
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(_err) = self.tick() {
                #[cfg(feature = "log")]
                log::warn!("IMU read failed: {:?}", _err);
                #[cfg(all(feature = "defmt", not(feature = "log")))]
                defmt::warn!("IMU read failed");
            }
        }
    }

    /// Clean pipeline orientation
    pub fn clean(&self) -> Orientation {
        self.clean.state()
    }

    /// Noisy pipeline orientation
    pub fn noisy(&self) -> Orientation {
        self.noisy.state()
    }

    /// Current tick context
    pub fn context(&self) -> TickContext {
        self.context
    }

    /// Output sink
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Output sink, mutably
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Transport, mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take the collaborators back
    pub fn into_parts(self) -> (T, C, W, R) {
        (self.transport, self.clock, self.sink, self.noise.into_inner())
    }
}
