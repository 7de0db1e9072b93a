//! Gyroscope integration
//!
//! One rectangle-rule step: `delta = rate · dt`. No bias removal and no drift
//! correction happen here; the complementary filter's accelerometer term pulls
//! accumulated drift back out.

use crate::types::{AngularRate, GyroDelta};

/// Integrate an angular rate over `elapsed_s` seconds
///
/// X rate feeds roll, Y rate feeds pitch.
#[inline]
pub fn integrate(rate: &AngularRate, elapsed_s: f32) -> GyroDelta {
    GyroDelta {
        roll: rate.x * elapsed_s,
        pitch: rate.y * elapsed_s,
    }
}
