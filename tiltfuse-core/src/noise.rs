//! Synthetic Gaussian noise for robustness evaluation
//!
//! The noisy pipeline sees every sensor component shifted by an independent
//! normal draw. Draws come from the Box–Muller transform:
//!
//! ```text
//! z = sqrt(-2·ln(u1)) · cos(2π·u2)
//! noise = mean + std_dev · z
//! ```
//!
//! `u1` and `u2` are uniform on [0, 1) built from 24 random bits. A draw of
//! exactly zero would make `ln(u1)` infinite, so any draw at or below zero is
//! clamped to [`EPSILON`]. The sine half of the transform is discarded; each
//! call consumes two fresh uniforms.
//!
//! The random source is any `rand_core::RngCore`. Targets without a hardware
//! RNG can use [`XorShift32`].

use core::f32::consts::PI;

use rand_core::{impls, Error as RngError, RngCore};

use crate::constants::fusion::{EPSILON, UNIFORM_BITS, UNIFORM_SCALE, XORSHIFT_FALLBACK_SEED};
use crate::constants::{NOISE_MEAN_DEFAULT, NOISE_STD_DEV_DEFAULT};
use crate::errors::{FusionError, FusionResult};
use crate::types::{Acceleration, AngularRate, SensorSample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean and standard deviation of the injected noise
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseParameters {
    /// Mean added to every draw
    pub mean: f32,
    /// Standard deviation of every draw
    pub std_dev: f32,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            mean: NOISE_MEAN_DEFAULT,
            std_dev: NOISE_STD_DEV_DEFAULT,
        }
    }
}

impl NoiseParameters {
    /// Create validated noise parameters
    pub fn new(mean: f32, std_dev: f32) -> FusionResult<Self> {
        let params = Self { mean, std_dev };
        params.validate()?;
        Ok(params)
    }

    /// Both values finite and `std_dev >= 0`
    pub fn validate(&self) -> FusionResult<()> {
        if self.mean.is_finite() && self.std_dev.is_finite() && self.std_dev >= 0.0 {
            Ok(())
        } else {
            Err(FusionError::InvalidNoise {
                mean: self.mean,
                std_dev: self.std_dev,
            })
        }
    }
}

/// Gaussian noise generator over an arbitrary random source
#[derive(Debug, Clone)]
pub struct GaussianNoise<R> {
    rng: R,
    params: NoiseParameters,
}

impl<R: RngCore> GaussianNoise<R> {
    /// Generator with the default noise model (mean 0, std dev 0.1)
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            params: NoiseParameters::default(),
        }
    }

    /// Generator with a custom noise model
    pub fn with_params(rng: R, params: NoiseParameters) -> Self {
        Self { rng, params }
    }

    /// Noise model used by [`corrupt`](Self::corrupt)
    pub fn params(&self) -> NoiseParameters {
        self.params
    }

    /// Replace the noise model
    pub fn set_params(&mut self, params: NoiseParameters) {
        self.params = params;
    }

    /// Uniform draw on [EPSILON, 1)
    fn uniform(&mut self) -> f32 {
        let bits = self.rng.next_u32() >> (32 - UNIFORM_BITS);
        let u = bits as f32 / UNIFORM_SCALE;
        if u <= 0.0 {
            EPSILON
        } else {
            u
        }
    }

    /// One independent normal draw
    pub fn sample(&mut self, mean: f32, std_dev: f32) -> f32 {
        let u1 = self.uniform();
        let u2 = self.uniform();

        let z = libm::sqrtf(-2.0 * libm::logf(u1)) * libm::cosf(2.0 * PI * u2);
        mean + std_dev * z
    }

    /// One draw from the configured noise model
    pub fn next_noise(&mut self) -> f32 {
        let NoiseParameters { mean, std_dev } = self.params;
        self.sample(mean, std_dev)
    }

    /// Copy of `sample` with independent noise on all five components
    ///
    /// Draw order is ax, ay, az, gx, gy.
    pub fn corrupt(&mut self, sample: &SensorSample) -> SensorSample {
        let accel = Acceleration {
            x: sample.accel.x + self.next_noise(),
            y: sample.accel.y + self.next_noise(),
            z: sample.accel.z + self.next_noise(),
        };
        let gyro = AngularRate {
            x: sample.gyro.x + self.next_noise(),
            y: sample.gyro.y + self.next_noise(),
        };
        SensorSample { accel, gyro }
    }

    /// Give back the random source
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Marsaglia xorshift32 generator
///
/// Four bytes of state and three shifts per word; plenty for test noise, not
/// for anything security related.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seeded generator; a zero seed is replaced by a fixed nonzero one
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { XORSHIFT_FALLBACK_SEED } else { seed };
        Self { state }
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always returns the same word, to pin the uniform draws
    struct ConstantRng(u32);

    impl RngCore for ConstantRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
        fn next_u64(&mut self) -> u64 {
            self.0 as u64
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn moments(noise: &mut GaussianNoise<XorShift32>, n: usize, mean: f32, std_dev: f32) -> (f64, f64) {
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for _ in 0..n {
            let x = noise.sample(mean, std_dev);
            assert!(x.is_finite(), "draw must be finite, got {}", x);
            sum += x as f64;
            sum_sq += (x as f64) * (x as f64);
        }
        let m = sum / n as f64;
        let var = sum_sq / n as f64 - m * m;
        (m, var.sqrt())
    }

    #[test]
    fn standard_normal_moments() {
        let mut noise = GaussianNoise::new(XorShift32::new(42));
        let (mean, std_dev) = moments(&mut noise, 10_000, 0.0, 1.0);
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((std_dev - 1.0).abs() < 0.05, "std dev {}", std_dev);
    }

    #[test]
    fn shifted_and_scaled_moments() {
        let mut noise = GaussianNoise::new(XorShift32::new(7));
        let (mean, std_dev) = moments(&mut noise, 10_000, 3.0, 0.1);
        assert!((mean - 3.0).abs() < 0.01, "mean {}", mean);
        assert!((std_dev - 0.1).abs() < 0.01, "std dev {}", std_dev);
    }

    #[test]
    fn zero_uniform_is_clamped() {
        // Zero bits would give ln(0) = -inf without the clamp
        let mut noise = GaussianNoise::new(ConstantRng(0));
        let x = noise.sample(0.0, 1.0);
        assert!(x.is_finite());

        let expected = libm::sqrtf(-2.0 * libm::logf(EPSILON)) * libm::cosf(2.0 * PI * EPSILON);
        assert!((x - expected).abs() < 1e-4);
    }

    #[test]
    fn zero_std_dev_returns_mean() {
        let mut noise = GaussianNoise::new(XorShift32::new(1));
        for _ in 0..100 {
            assert_eq!(noise.sample(0.25, 0.0), 0.25);
        }
    }

    #[test]
    fn corrupt_touches_every_component() {
        let mut noise = GaussianNoise::new(XorShift32::new(99));
        let clean = SensorSample::level(9.8);
        let noisy = noise.corrupt(&clean);

        assert_ne!(noisy.accel.x, clean.accel.x);
        assert_ne!(noisy.accel.y, clean.accel.y);
        assert_ne!(noisy.accel.z, clean.accel.z);
        assert_ne!(noisy.gyro.x, clean.gyro.x);
        assert_ne!(noisy.gyro.y, clean.gyro.y);
    }

    #[test]
    fn corrupt_uses_draws_in_axis_order() {
        let mut noise = GaussianNoise::new(XorShift32::new(5));
        let mut reference = GaussianNoise::new(XorShift32::new(5));

        let noisy = noise.corrupt(&SensorSample::default());
        assert_eq!(noisy.accel.x, reference.next_noise());
        assert_eq!(noisy.accel.y, reference.next_noise());
        assert_eq!(noisy.accel.z, reference.next_noise());
        assert_eq!(noisy.gyro.x, reference.next_noise());
        assert_eq!(noisy.gyro.y, reference.next_noise());
    }

    #[test]
    fn same_seed_same_noise() {
        let mut a = GaussianNoise::new(XorShift32::new(1234));
        let mut b = GaussianNoise::new(XorShift32::new(1234));
        for _ in 0..100 {
            assert_eq!(a.next_noise(), b.next_noise());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn noise_parameters_validation() {
        assert!(NoiseParameters::new(0.0, 0.1).is_ok());
        assert!(NoiseParameters::new(0.0, 0.0).is_ok());
        assert_eq!(
            NoiseParameters::new(0.0, -1.0),
            Err(FusionError::InvalidNoise { mean: 0.0, std_dev: -1.0 })
        );
        assert!(NoiseParameters::new(f32::NAN, 1.0).is_err());
        assert!(NoiseParameters::new(0.0, f32::INFINITY).is_err());
    }
}
