//! LSM6DSL Register Map and Scale Factors
//!
//! Only the registers the transport touches are listed.
//!
//! Source: ST LSM6DSL datasheet, DocID028475 Rev 7

// ===== SPI FRAMING =====

/// Read flag OR-ed into the register address on SPI.
pub const SPI_READ_FLAG: u8 = 0x80;

// ===== IDENTIFICATION =====

/// WHO_AM_I register address.
pub const LSM6DSL_WHO_AM_I_REG: u8 = 0x0F;

/// Expected WHO_AM_I value for the LSM6DSL.
pub const LSM6DSL_WHO_AM_I_VALUE: u8 = 0x6A;

// ===== CONTROL REGISTERS =====

/// Accelerometer control register (ODR, full scale).
pub const CTRL1_XL: u8 = 0x10;

/// Gyroscope control register (ODR, full scale).
pub const CTRL2_G: u8 = 0x11;

/// Common control register (BDU, IF_INC, SW_RESET).
pub const CTRL3_C: u8 = 0x12;

/// CTRL1_XL: 104 Hz, ±2 g.
pub const CTRL1_XL_104HZ_2G: u8 = 0x40;

/// CTRL2_G: 104 Hz, 250 dps.
pub const CTRL2_G_104HZ_250DPS: u8 = 0x40;

/// CTRL3_C: block data update + register address auto-increment.
pub const CTRL3_C_BDU_IF_INC: u8 = 0x44;

// ===== OUTPUT REGISTERS =====

/// First gyroscope output register. Gyro XYZ then accel XYZ follow,
/// little-endian i16 each, 12 bytes total.
pub const OUTX_L_G: u8 = 0x22;

/// Length of one gyro + accel burst read.
pub const SAMPLE_BURST_LEN: usize = 12;

// ===== SCALE FACTORS =====

/// Accelerometer sensitivity at ±2 g (mg/LSB).
pub const ACCEL_SENSITIVITY_2G_MG_PER_LSB: f32 = 0.061;

/// Gyroscope sensitivity at 250 dps (mdps/LSB).
pub const GYRO_SENSITIVITY_250DPS_MDPS_PER_LSB: f32 = 8.75;
