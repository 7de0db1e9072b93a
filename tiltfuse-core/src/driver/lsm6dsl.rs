//! LSM6DSL accelerometer + gyroscope over SPI
//!
//! Minimal driver covering what the tick loop needs: identity probe,
//! continuous-mode bring-up, and one burst read per sample.
//!
//! ## Bring-up
//!
//! ```text
//! CTRL3_C  = 0x44   block data update, address auto-increment
//! CTRL1_XL = 0x40   accel 104 Hz, ±2 g
//! CTRL2_G  = 0x40   gyro 104 Hz, 250 dps
//! ```
//!
//! ## Output
//!
//! A 12-byte read starting at `OUTX_L_G` returns gyro X/Y/Z then accel X/Y/Z,
//! each a little-endian `i16`. Gyro rates are reported in rad/s and
//! accelerations in m/s², the units the default trust factor is tuned for.
//! Gyro Z is read but not used.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tiltfuse_core::driver::Lsm6dsl;
//! use tiltfuse_core::traits::ImuTransport;
//!
//! let mut imu = Lsm6dsl::new(spi_device);
//! imu.initialize()?;
//! let sample = imu.read_sample()?;
//! ```

use core::fmt::Debug;

use embedded_hal::spi::{Operation, SpiDevice};
use thiserror_no_std::Error;

use crate::constants::physics::{DEG_TO_RAD, STANDARD_GRAVITY_MPS2};
use crate::constants::sensors::*;
use crate::traits::ImuTransport;
use crate::types::{Acceleration, AngularRate, SensorSample};

/// LSM6DSL transport errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DriverError<E: Debug> {
    /// The SPI bus reported a failure
    #[error("SPI transfer failed: {0:?}")]
    Spi(E),

    /// WHO_AM_I did not identify an LSM6DSL
    #[error("Unexpected WHO_AM_I {found:#04x}, expected 0x6a")]
    UnexpectedDevice {
        /// Value read from the identification register
        found: u8,
    },
}

/// LSM6DSL on an SPI device with its own chip select
#[derive(Debug)]
pub struct Lsm6dsl<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Lsm6dsl<SPI> {
    /// Wrap an SPI device; no bus traffic until [`initialize`](ImuTransport::initialize)
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give back the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), DriverError<SPI::Error>> {
        self.spi
            .transaction(&mut [Operation::Write(&[reg | SPI_READ_FLAG]), Operation::Read(buf)])
            .map_err(DriverError::Spi)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, DriverError<SPI::Error>> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), DriverError<SPI::Error>> {
        self.spi.write(&[reg, value]).map_err(DriverError::Spi)
    }
}

/// Little-endian i16 at `offset`
#[inline]
fn le_i16(buf: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Convert a raw 12-byte burst into SI units
pub(crate) fn decode_burst(buf: &[u8; SAMPLE_BURST_LEN]) -> SensorSample {
    let gyro_scale = GYRO_SENSITIVITY_250DPS_MDPS_PER_LSB / 1000.0 * DEG_TO_RAD;
    let accel_scale = ACCEL_SENSITIVITY_2G_MG_PER_LSB / 1000.0 * STANDARD_GRAVITY_MPS2;

    SensorSample {
        gyro: AngularRate {
            x: le_i16(buf, 0) as f32 * gyro_scale,
            y: le_i16(buf, 2) as f32 * gyro_scale,
        },
        accel: Acceleration {
            x: le_i16(buf, 6) as f32 * accel_scale,
            y: le_i16(buf, 8) as f32 * accel_scale,
            z: le_i16(buf, 10) as f32 * accel_scale,
        },
    }
}

impl<SPI: SpiDevice> ImuTransport for Lsm6dsl<SPI> {
    type Error = DriverError<SPI::Error>;

    fn read_who_am_i(&mut self) -> Result<u8, Self::Error> {
        self.read_register(LSM6DSL_WHO_AM_I_REG)
    }

    fn initialize(&mut self) -> Result<(), Self::Error> {
        let found = self.read_who_am_i()?;
        if found != LSM6DSL_WHO_AM_I_VALUE {
            log_warn!("WHO_AM_I mismatch: {}", found);
            return Err(DriverError::UnexpectedDevice { found });
        }

        self.write_register(CTRL3_C, CTRL3_C_BDU_IF_INC)?;
        self.write_register(CTRL1_XL, CTRL1_XL_104HZ_2G)?;
        self.write_register(CTRL2_G, CTRL2_G_104HZ_250DPS)?;
        log_debug!("LSM6DSL configured: 104 Hz, 2 g, 250 dps");
        Ok(())
    }

    fn read_sample(&mut self) -> Result<SensorSample, Self::Error> {
        let mut buf = [0u8; SAMPLE_BURST_LEN];
        self.read_registers(OUTX_L_G, &mut buf)?;
        Ok(decode_burst(&buf))
    }
}
