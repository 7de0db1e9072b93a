//! Kinematic test scenarios
//!
//! A `TiltRig` holds the true roll/pitch of a simulated board and produces
//! the accelerometer and gyroscope readings that board would see. Rates are
//! in deg/s so the fused angles (degrees) track the truth exactly when no
//! noise is present.
//!
//! Sensor conventions match the fusion core:
//! - roll φ:  ay = g·sin φ, az = g·cos φ, gyro x = +dφ/dt
//! - pitch θ: ax = g·sin θ, az = g·cos θ, gyro y = −dθ/dt

use std::cell::Cell;
use std::rc::Rc;

use tiltfuse_core::time::{FixedTime, Timestamp};
use tiltfuse_core::traits::{ImuTransport, TimeSource};
use tiltfuse_core::types::{Acceleration, AngularRate, SensorSample};

use super::BusFault;

/// Which single axis the rig rotates about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Roll,
    Pitch,
}

/// Constant-rate rotation about one axis, then hold
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub axis: Axis,
    /// Degrees per second while moving
    pub rate_dps: f32,
    /// Rotation stops after this many milliseconds; the tick landing exactly
    /// on the stop time still sees the rate
    pub duration_ms: u32,
}

/// Simulated board driven by a shared clock
pub struct TiltRig {
    clock: Rc<FixedTime>,
    start_ms: Timestamp,
    motion: Motion,
    gravity: f32,
    pub reads: Rc<Cell<u32>>,
}

impl TiltRig {
    pub fn new(clock: Rc<FixedTime>, motion: Motion, gravity: f32) -> Self {
        let start_ms = clock.now();
        Self {
            clock,
            start_ms,
            motion,
            gravity,
            reads: Rc::new(Cell::new(0)),
        }
    }

    fn elapsed_ms(&self) -> u32 {
        self.clock.now().wrapping_sub(self.start_ms)
    }

    /// True angle of the moving axis at the current clock reading (degrees)
    pub fn true_angle(&self) -> f32 {
        let t = self.elapsed_ms().min(self.motion.duration_ms) as f32 / 1000.0;
        self.motion.rate_dps * t
    }

    fn current_rate(&self) -> f32 {
        if self.elapsed_ms() <= self.motion.duration_ms {
            self.motion.rate_dps
        } else {
            0.0
        }
    }
}

impl ImuTransport for TiltRig {
    type Error = BusFault;

    fn read_who_am_i(&mut self) -> Result<u8, BusFault> {
        Ok(0x6A)
    }

    fn initialize(&mut self) -> Result<(), BusFault> {
        Ok(())
    }

    fn read_sample(&mut self) -> Result<SensorSample, BusFault> {
        self.reads.set(self.reads.get() + 1);

        let angle = self.true_angle().to_radians();
        let (s, c) = (angle.sin() * self.gravity, angle.cos() * self.gravity);
        let rate = self.current_rate();

        let sample = match self.motion.axis {
            Axis::Roll => SensorSample::new(Acceleration::new(0.0, s, c), AngularRate::new(rate, 0.0)),
            Axis::Pitch => SensorSample::new(Acceleration::new(s, 0.0, c), AngularRate::new(0.0, -rate)),
        };
        Ok(sample)
    }
}
