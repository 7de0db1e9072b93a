//! Firmware console output consumed end to end by the host reader

use std::io::Cursor;

use tiltfuse_core::{
    noise::XorShift32,
    time::FixedTime,
    traits::ImuTransport,
    types::{Acceleration, AngularRate, SensorSample},
    FusionConfig, TickDriver,
};
use tiltfuse_host::{AdaptiveDenoiser, RecordReader, TiltRecord};

struct TiltedBoard;

impl ImuTransport for TiltedBoard {
    type Error = ();

    fn read_who_am_i(&mut self) -> Result<u8, ()> {
        Ok(0x6A)
    }

    fn initialize(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn read_sample(&mut self) -> Result<SensorSample, ()> {
        let roll = 15f32.to_radians();
        Ok(SensorSample::new(
            Acceleration::new(0.0, 9.8 * roll.sin(), 9.8 * roll.cos()),
            AngularRate::default(),
        ))
    }
}

struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn capture_console(seconds: u32) -> (String, Vec<TiltRecord>) {
    let clock = FixedTime::new(0);
    let mut driver = TickDriver::new(
        TiltedBoard,
        &clock,
        String::new(),
        XorShift32::new(11),
        FusionConfig::default(),
    )
    .unwrap();

    driver.startup(&mut NoDelay);
    let mut reports = Vec::new();
    for _ in 0..seconds * 100 {
        clock.advance(10);
        if let Some(report) = driver.tick().unwrap().report {
            reports.push(TiltRecord::from(report));
        }
    }
    let (_, _, console, _) = driver.into_parts();
    (console, reports)
}

#[test]
fn every_report_is_recovered() {
    let (console, reports) = capture_console(5);
    assert_eq!(reports.len(), 5);

    let parsed: Vec<TiltRecord> = RecordReader::new(Cursor::new(console))
        .filter_map(Result::ok)
        .collect();

    assert_eq!(parsed.len(), reports.len());
    for (got, sent) in parsed.iter().zip(&reports) {
        assert!((got.roll - sent.roll).abs() < 0.0051);
        assert!((got.noisy_pitch - sent.noisy_pitch).abs() < 0.0051);
    }
}

#[test]
fn startup_banner_only_costs_parse_errors() {
    let (console, _) = capture_console(2);
    let errors = RecordReader::new(Cursor::new(console))
        .filter(Result::is_err)
        .count();
    // "Testing IMU!", "Testing SPI...", "WHO_AM_I ...", "Attempting ...", "IMU initialized ..."
    assert_eq!(errors, 5);
}

#[test]
fn denoiser_runs_over_console() {
    let (console, _) = capture_console(20);
    let mut denoiser = AdaptiveDenoiser::new();
    for record in RecordReader::new(Cursor::new(console)).filter_map(Result::ok) {
        denoiser.push(record);
    }

    assert_eq!(denoiser.window().len(), 20);
    let last = denoiser.window().back().unwrap();
    assert!((last.record.roll - 15.0).abs() < 0.01);
    assert!(last.to_json_line().unwrap().contains("\"filtered_roll\""));
}
