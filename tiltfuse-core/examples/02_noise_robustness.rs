//! Noise Robustness Example
//!
//! Feeds the same stationary tilt through the clean and noisy pipelines at
//! several noise levels and trust factors, and prints how far the noisy
//! estimate strays from the clean one.
//!
//! ## What You'll Learn
//!
//! - Using `GaussianNoise` and `FusionPipeline` directly, without the driver
//! - How the trust factor trades noise rejection against response time
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_noise_robustness
//! ```

use tiltfuse_core::{
    fusion::FusionPipeline,
    noise::{GaussianNoise, XorShift32},
    types::{Acceleration, AngularRate, SensorSample},
    FusionConfig, FusionResult,
};

const TICKS: usize = 2000;
const SETTLE: usize = 500;
const DT: f32 = 0.01;

/// RMS difference between noisy and clean roll after settling
fn rms_error(config: FusionConfig, sample: &SensorSample) -> FusionResult<f32> {
    let mut clean = FusionPipeline::clean(&config)?;
    let mut noisy = FusionPipeline::noisy(&config)?;
    let mut noise = GaussianNoise::with_params(XorShift32::new(7), config.noise);

    let mut sum_sq = 0.0;
    for i in 0..TICKS {
        let c = clean.step(sample, DT);
        let n = noisy.step(&noise.corrupt(sample), DT);
        if i >= SETTLE {
            sum_sq += (c.roll - n.roll).powi(2);
        }
    }
    Ok((sum_sq / (TICKS - SETTLE) as f32).sqrt())
}

fn main() -> FusionResult<()> {
    println!("TiltFuse Noise Robustness Example");
    println!("=================================\n");

    let roll = 20f32.to_radians();
    let sample = SensorSample::new(
        Acceleration::new(0.0, 9.8 * roll.sin(), 9.8 * roll.cos()),
        AngularRate::default(),
    );

    let std_devs = [0.05, 0.1, 0.5, 1.0];
    let trust_factors = [0.8, 0.95, 0.99];

    print!("{:>10}", "std dev");
    for t in &trust_factors {
        print!("{:>12}", format!("t = {}", t));
    }
    println!();

    for &std_dev in &std_devs {
        print!("{:>10}", std_dev);
        for &t in &trust_factors {
            let config = FusionConfig::default()
                .with_trust_factor(t)
                .with_noise(0.0, std_dev);
            print!("{:>11.3}°", rms_error(config, &sample)?);
        }
        println!();
    }

    println!("\nHigher trust factors average out more accelerometer noise,");
    println!("at the cost of slower correction of gyroscope drift.");
    Ok(())
}
