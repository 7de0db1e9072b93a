//! Two-term complementary filter
//!
//! The gyroscope integral is smooth but drifts; the accelerometer inclination
//! does not drift but is noisy. Blending them with weights `t` and `1 − t`
//! high-passes the first and low-passes the second:
//!
//! ```text
//! roll'  = (roll  + Δroll)  · t + accel_roll  · (1 − t)
//! pitch' = (pitch − Δpitch) · t + accel_pitch · (1 − t)
//! ```
//!
//! The gyro delta is added on roll and subtracted on pitch. That matches the
//! mounting of the sensor: the Y gyro axis turns opposite to the pitch angle
//! the accelerometer reports. Flipping either sign inverts that axis.
//!
//! Each update is a first-order IIR step; with zero gyro input the state
//! closes `1 − t` of its distance to the accelerometer estimate per call.

use crate::constants::TRUST_FACTOR_DEFAULT;
use crate::errors::{FusionError, FusionResult};
use crate::types::{AngleEstimate, GyroDelta, Orientation};

/// Weight of the gyroscope path, strictly inside (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TrustFactor(f32);

impl TrustFactor {
    /// Validated trust factor
    pub fn new(value: f32) -> FusionResult<Self> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(FusionError::InvalidTrustFactor { value })
        }
    }

    /// Weight on the integrated gyroscope angle
    #[inline]
    pub fn weight(&self) -> f32 {
        self.0
    }

    /// Weight on the accelerometer angle, `1 − weight`
    #[inline]
    pub fn complement(&self) -> f32 {
        1.0 - self.0
    }

    /// Updates needed to shrink an initial error by `ratio` with no gyro input
    ///
    /// Solves `t^n <= ratio` for `n`. Grows like `1 / (1 − t)`.
    pub fn settling_steps(&self, ratio: f32) -> u32 {
        let n = libm::logf(ratio) / libm::logf(self.0);
        libm::ceilf(n) as u32
    }
}

impl Default for TrustFactor {
    fn default() -> Self {
        Self(TRUST_FACTOR_DEFAULT)
    }
}

impl TryFrom<f32> for TrustFactor {
    type Error = FusionError;

    fn try_from(value: f32) -> FusionResult<Self> {
        Self::new(value)
    }
}

/// Complementary filter with a fixed trust factor
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplementaryFilter {
    trust: TrustFactor,
}

impl ComplementaryFilter {
    /// Filter with the given trust factor
    pub fn new(trust: TrustFactor) -> Self {
        Self { trust }
    }

    /// Trust factor in use
    pub fn trust(&self) -> TrustFactor {
        self.trust
    }

    /// Advance `state` by one step and return the new value
    pub fn update(
        &self,
        state: &mut Orientation,
        delta: &GyroDelta,
        estimate: &AngleEstimate,
    ) -> Orientation {
        let t = self.trust.weight();
        let c = self.trust.complement();

        state.roll = (state.roll + delta.roll) * t + estimate.roll * c;
        state.pitch = (state.pitch - delta.pitch) * t + estimate.pitch * c;
        *state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filter(t: f32) -> ComplementaryFilter {
        ComplementaryFilter::new(TrustFactor::new(t).unwrap())
    }

    #[test]
    fn trust_factor_bounds() {
        assert!(TrustFactor::new(0.5).is_ok());
        assert!(TrustFactor::new(0.999).is_ok());
        assert_eq!(
            TrustFactor::new(0.0),
            Err(FusionError::InvalidTrustFactor { value: 0.0 })
        );
        assert!(TrustFactor::new(1.0).is_err());
        assert!(TrustFactor::new(-0.1).is_err());
        assert!(TrustFactor::new(f32::NAN).is_err());
    }

    #[test]
    fn default_trust_is_ninety_five_percent() {
        let t = TrustFactor::default();
        assert_eq!(t.weight(), 0.95);
        assert!((t.complement() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn worked_example() {
        let mut state = Orientation::new(0.0, 0.0);
        let delta = GyroDelta { roll: 5.0, pitch: 3.0 };
        let estimate = AngleEstimate { roll: 2.0, pitch: 1.0 };

        let next = filter(0.95).update(&mut state, &delta, &estimate);

        assert!((next.roll - 4.85).abs() < 1e-5, "roll {}", next.roll);
        assert!((next.pitch + 2.80).abs() < 1e-5, "pitch {}", next.pitch);
        assert_eq!(next, state);
    }

    #[test]
    fn roll_adds_gyro_delta() {
        // Zero accel weight contribution isolates the gyro sign
        let mut state = Orientation::new(10.0, 10.0);
        let delta = GyroDelta { roll: 1.0, pitch: 0.0 };
        let estimate = AngleEstimate { roll: 10.0, pitch: 10.0 };

        let next = filter(0.5).update(&mut state, &delta, &estimate);
        // (10 + 1)·0.5 + 10·0.5 = 10.5; a flipped sign would give 9.5
        assert_eq!(next.roll, 10.5);
        assert_eq!(next.pitch, 10.0);
    }

    #[test]
    fn pitch_subtracts_gyro_delta() {
        let mut state = Orientation::new(10.0, 10.0);
        let delta = GyroDelta { roll: 0.0, pitch: 1.0 };
        let estimate = AngleEstimate { roll: 10.0, pitch: 10.0 };

        let next = filter(0.5).update(&mut state, &delta, &estimate);
        // (10 − 1)·0.5 + 10·0.5 = 9.5; a flipped sign would give 10.5
        assert_eq!(next.pitch, 9.5);
        assert_eq!(next.roll, 10.0);
    }

    #[test]
    fn converges_to_constant_estimate() {
        let trust = TrustFactor::new(0.95).unwrap();
        let f = ComplementaryFilter::new(trust);
        let target = AngleEstimate { roll: 30.0, pitch: -20.0 };
        let mut state = Orientation::default();

        let steps = trust.settling_steps(1e-3);
        // 1 / (1 − 0.95) = 20 and ln(1e-3) ≈ −6.9, so about 135 steps
        assert!(steps > 100 && steps < 150, "steps {}", steps);

        for _ in 0..steps {
            f.update(&mut state, &GyroDelta::default(), &target);
        }
        assert!(state.max_abs_diff(&target.into()) <= 30.0 * 1e-3 + 1e-4);
    }

    #[test]
    fn settling_scales_with_inverse_complement() {
        let slow = TrustFactor::new(0.99).unwrap().settling_steps(0.01);
        let fast = TrustFactor::new(0.9).unwrap().settling_steps(0.01);
        // Ten times smaller complement, roughly ten times longer
        assert!(slow > 9 * fast && slow < 11 * fast, "slow {} fast {}", slow, fast);
    }

    proptest! {
        #[test]
        fn weights_sum_to_one(t in 1e-4f32..0.9999f32) {
            let trust = TrustFactor::new(t).unwrap();
            prop_assert!((trust.weight() + trust.complement() - 1.0).abs() <= f32::EPSILON);
        }

        #[test]
        fn fixed_point_is_preserved(
            t in 0.01f32..0.99f32,
            roll in -180.0f32..180.0f32,
            pitch in -180.0f32..180.0f32,
        ) {
            let mut state = Orientation::new(roll, pitch);
            let estimate = AngleEstimate { roll, pitch };
            let next = filter(t).update(&mut state, &GyroDelta::default(), &estimate);

            prop_assert!((next.roll - roll).abs() <= 1e-4 * roll.abs().max(1.0));
            prop_assert!((next.pitch - pitch).abs() <= 1e-4 * pitch.abs().max(1.0));
        }

        #[test]
        fn each_step_moves_toward_estimate(
            t in 0.01f32..0.99f32,
            start in -90.0f32..90.0f32,
            target in -90.0f32..90.0f32,
        ) {
            let mut state = Orientation::new(start, start);
            let estimate = AngleEstimate { roll: target, pitch: target };
            let before = (start - target).abs();
            filter(t).update(&mut state, &GyroDelta::default(), &estimate);
            prop_assert!((state.roll - target).abs() <= before + 1e-4);
            prop_assert!((state.pitch - target).abs() <= before + 1e-4);
        }
    }
}
