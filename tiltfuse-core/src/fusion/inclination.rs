//! Accelerometer inclination estimate
//!
//! With the board at rest the accelerometer measures only gravity, so its
//! direction gives roll and pitch:
//!
//! ```text
//! roll  = atan2(ay/g, az/g + bias) · 180/π
//! pitch = atan2(ax/g, az/g + bias) · 180/π
//! ```
//!
//! Sign convention: a positive X reading pitches positive, a positive Y
//! reading rolls positive. Flat and face up, (0, 0, g), is (0°, 0°);
//! X pointing straight up, (g, 0, 0), is pitch +90°.
//!
//! No validity check is made. Linear acceleration, free fall or a zero
//! vector are converted blindly; the complementary filter's gyro path is what
//! carries the estimate through such stretches.
//!
//! The `bias` term exists for the noisy pipeline. When noise drags `az`
//! toward zero the sign of the denominator flickers and atan2 jumps by up to
//! 360°; a small positive offset keeps an all-zero input at a finite 0°.

use crate::constants::physics::RAD_TO_DEG;
use crate::types::{Acceleration, AngleEstimate};

/// Roll/pitch from a gravity vector, unbiased denominator
pub fn estimate(accel: &Acceleration, gravity: f32) -> AngleEstimate {
    estimate_biased(accel, gravity, 0.0)
}

/// Roll/pitch from a gravity vector with `bias` added to the z term
pub fn estimate_biased(accel: &Acceleration, gravity: f32, bias: f32) -> AngleEstimate {
    let x = accel.x / gravity;
    let y = accel.y / gravity;
    let z = accel.z / gravity + bias;

    AngleEstimate {
        roll: libm::atan2f(y, z) * RAD_TO_DEG,
        pitch: libm::atan2f(x, z) * RAD_TO_DEG,
    }
}
