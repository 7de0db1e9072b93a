//! Tilt Simulation Example
//!
//! Runs the full tick loop on a host against a simulated board that rolls
//! over to 30° and back while the clock advances 10 ms per tick.
//!
//! ## What You'll Learn
//!
//! - Implementing `ImuTransport` for your own sensor source
//! - Driving `TickDriver` with an injected clock and output sink
//! - Reading the two-line report format
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_tilt_simulation
//! ```

use std::fmt;

use tiltfuse_core::{
    noise::XorShift32,
    time::FixedTime,
    traits::{ImuTransport, ReportSink, TimeSource},
    types::{Acceleration, AngularRate, SensorSample},
    FusionConfig, TickDriver,
};

const G: f32 = 9.8;
const TICK_MS: u32 = 10;

/// Board that rolls at ±30 deg/s in a trapezoid profile
struct RollingBoard<'a> {
    clock: &'a FixedTime,
    last_ms: u32,
    roll_deg: f32,
}

impl RollingBoard<'_> {
    fn rate_at(ms: u32) -> f32 {
        match ms {
            0..=999 => 30.0,
            1000..=1999 => 0.0,
            2000..=2999 => -30.0,
            _ => 0.0,
        }
    }
}

impl ImuTransport for RollingBoard<'_> {
    type Error = ();

    fn read_who_am_i(&mut self) -> Result<u8, ()> {
        Ok(0x6A)
    }

    fn initialize(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn read_sample(&mut self) -> Result<SensorSample, ()> {
        let now = self.clock.now();
        let rate = Self::rate_at(self.last_ms);
        let dt = now.wrapping_sub(self.last_ms) as f32 / 1000.0;
        self.roll_deg += rate * dt;
        self.last_ms = now;

        let roll = self.roll_deg.to_radians();
        Ok(SensorSample::new(
            Acceleration::new(0.0, G * roll.sin(), G * roll.cos()),
            AngularRate::new(Self::rate_at(now), 0.0),
        ))
    }
}

/// Prints everything it receives to stdout
struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

impl ReportSink for Stdout {}

struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn main() {
    println!("TiltFuse Tilt Simulation Example");
    println!("================================\n");

    let clock = FixedTime::new(0);
    let board = RollingBoard {
        clock: &clock,
        last_ms: 0,
        roll_deg: 0.0,
    };

    let config = FusionConfig::default().with_report_interval_ms(500);
    let mut driver = match TickDriver::new(board, &clock, Stdout, XorShift32::new(2024), config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    driver.startup(&mut NoDelay);
    println!("\nReports (clean pitch, clean roll / noisy pitch, noisy roll):");

    for _ in 0..(4000 / TICK_MS) {
        clock.advance(TICK_MS);
        if driver.tick().is_err() {
            println!("read failed");
        }
    }

    let clean = driver.clean();
    let noisy = driver.noisy();
    println!("\nFinal clean: roll {:.2}°, pitch {:.2}°", clean.roll, clean.pitch);
    println!("Final noisy: roll {:.2}°, pitch {:.2}°", noisy.roll, noisy.pitch);
}
