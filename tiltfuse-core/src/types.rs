//! Value types shared by the fusion pipeline
//!
//! Everything here is a small `Copy` struct of `f32` fields. Only
//! [`Orientation`] outlives a tick; the rest are created, consumed and
//! dropped inside one iteration of the tick driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3-axis acceleration in m/s², gravity included
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Acceleration {
    /// X axis (m/s²)
    pub x: f32,
    /// Y axis (m/s²)
    pub y: f32,
    /// Z axis (m/s²)
    pub z: f32,
}

impl Acceleration {
    /// Create an acceleration vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 2-axis angular rate
///
/// `x` drives roll and `y` drives pitch. Units are whatever the transport
/// delivers (rad/s for the LSM6DSL driver); the integrator does not convert.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngularRate {
    /// Rate about the X axis
    pub x: f32,
    /// Rate about the Y axis
    pub y: f32,
}

impl AngularRate {
    /// Create an angular rate pair
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One IMU reading as delivered by the transport once per tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSample {
    /// Accelerometer reading
    pub accel: Acceleration,
    /// Gyroscope reading (X and Y only)
    pub gyro: AngularRate,
}

impl SensorSample {
    /// Create a sample from its two halves
    pub const fn new(accel: Acceleration, gyro: AngularRate) -> Self {
        Self { accel, gyro }
    }

    /// Sample of a board lying flat and still: (0, 0, g) and no rotation
    pub const fn level(gravity: f32) -> Self {
        Self {
            accel: Acceleration::new(0.0, 0.0, gravity),
            gyro: AngularRate::new(0.0, 0.0),
        }
    }
}

/// Roll/pitch derived from the gravity vector (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleEstimate {
    /// Roll (degrees)
    pub roll: f32,
    /// Pitch (degrees)
    pub pitch: f32,
}

/// Angular rate integrated over one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GyroDelta {
    /// Roll increment
    pub roll: f32,
    /// Pitch increment
    pub pitch: f32,
}

/// Persistent fused roll/pitch estimate (degrees)
///
/// One instance per pipeline. Starts at (0, 0) and is only ever advanced
/// by the complementary filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Roll (degrees)
    pub roll: f32,
    /// Pitch (degrees)
    pub pitch: f32,
}

impl Orientation {
    /// Create an orientation
    pub const fn new(roll: f32, pitch: f32) -> Self {
        Self { roll, pitch }
    }

    /// Largest absolute per-axis difference to another orientation
    pub fn max_abs_diff(&self, other: &Orientation) -> f32 {
        let roll = libm::fabsf(self.roll - other.roll);
        let pitch = libm::fabsf(self.pitch - other.pitch);
        roll.max(pitch)
    }
}

impl From<AngleEstimate> for Orientation {
    fn from(estimate: AngleEstimate) -> Self {
        Self {
            roll: estimate.roll,
            pitch: estimate.pitch,
        }
    }
}
