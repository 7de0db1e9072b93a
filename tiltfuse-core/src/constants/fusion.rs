//! Fusion Algorithm Constants
//!
//! Parameters for the complementary filter and the synthetic noise model that
//! feeds the noisy pipeline.

// ===== COMPLEMENTARY FILTER =====

/// Default trust factor for the gyroscope path.
///
/// 95% of each new estimate comes from the integrated gyroscope angle and
/// 5% from the accelerometer inclination. At a 100 Hz tick this gives a time
/// constant of roughly 0.2 s for drift correction.
///
/// Source: Digital filter design for IMU tilt estimation
pub const TRUST_FACTOR_DEFAULT: f32 = 0.95;

/// Small positive guard value.
///
/// Used both as the floor for uniform draws in the Box–Muller transform
/// (keeps `ln(u1)` finite) and as the default denominator bias of the noisy
/// inclination estimate.
pub const EPSILON: f32 = 1e-6;

/// Default denominator bias for the noisy inclination estimate.
pub const DENOMINATOR_BIAS_DEFAULT: f32 = EPSILON;

// ===== NOISE MODEL =====

/// Mean of the injected Gaussian noise.
pub const NOISE_MEAN_DEFAULT: f32 = 0.0;

/// Standard deviation of the injected Gaussian noise.
///
/// Applied in sensor units, so 0.1 m/s² on accelerometer axes and 0.1 rad/s
/// on gyroscope axes.
pub const NOISE_STD_DEV_DEFAULT: f32 = 0.1;

/// Number of bits taken from each random word for a uniform draw.
///
/// 24 bits is the full f32 mantissa, so every draw is exactly representable.
pub const UNIFORM_BITS: u32 = 24;

/// Scale that maps a `UNIFORM_BITS` integer onto [0, 1).
pub const UNIFORM_SCALE: f32 = (1u32 << UNIFORM_BITS) as f32;

/// Fallback seed for [`XorShift32`](crate::noise::XorShift32).
///
/// Xorshift has a fixed point at zero, so a zero seed is replaced by this.
pub const XORSHIFT_FALLBACK_SEED: u32 = 0x6A09_E667;
