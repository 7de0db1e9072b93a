//! One fusion pipeline: estimator variant plus persistent state
//!
//! The tick driver runs two of these side by side. They share the filter
//! and gravity constant and differ only in the denominator bias of the
//! inclination estimate: zero for the clean pipeline, [`EPSILON`] for the
//! noisy one.
//!
//! ```text
//! SensorSample ──┬── inclination::estimate_biased ──┐
//!                └── gyro::integrate ───────────────┴── ComplementaryFilter ── Orientation
//! ```
//!
//! [`EPSILON`]: crate::constants::EPSILON

use crate::config::FusionConfig;
use crate::errors::FusionResult;
use crate::fusion::{gyro, inclination, ComplementaryFilter};
use crate::types::{Orientation, SensorSample};

/// A complementary filter bound to its own orientation state
#[derive(Debug, Clone)]
pub struct FusionPipeline {
    filter: ComplementaryFilter,
    state: Orientation,
    gravity: f32,
    denominator_bias: f32,
}

impl FusionPipeline {
    /// Pipeline for clean samples, unbiased denominator
    pub fn clean(config: &FusionConfig) -> FusionResult<Self> {
        Self::with_bias(config, 0.0)
    }

    /// Pipeline for noise-injected samples, biased denominator
    pub fn noisy(config: &FusionConfig) -> FusionResult<Self> {
        Self::with_bias(config, config.denominator_bias)
    }

    fn with_bias(config: &FusionConfig, denominator_bias: f32) -> FusionResult<Self> {
        config.validate()?;
        Ok(Self {
            filter: ComplementaryFilter::new(config.trust()?),
            state: Orientation::default(),
            gravity: config.gravity,
            denominator_bias,
        })
    }

    /// Current fused orientation
    pub fn state(&self) -> Orientation {
        self.state
    }

    /// Bias added to the inclination denominator
    pub fn denominator_bias(&self) -> f32 {
        self.denominator_bias
    }

    /// Run one tick: estimate, integrate, fuse
    pub fn step(&mut self, sample: &SensorSample, elapsed_s: f32) -> Orientation {
        let estimate =
            inclination::estimate_biased(&sample.accel, self.gravity, self.denominator_bias);
        let delta = gyro::integrate(&sample.gyro, elapsed_s);
        self.filter.update(&mut self.state, &delta, &estimate)
    }
}
