//! IMU Transport Abstraction
//!
//! Register-level bus traffic stays behind this trait so the fusion core can
//! be exercised without hardware. The tick driver needs exactly three
//! capabilities from a sensor:
//!
//! - a one-byte identity probe, used only for a startup diagnostic
//! - a bring-up call that may fail without stopping the loop
//! - one [`SensorSample`] per tick
//!
//! ## Example Implementation
//!
//! ```rust
//! use tiltfuse_core::traits::ImuTransport;
//! use tiltfuse_core::types::SensorSample;
//!
//! /// Board lying flat on a table
//! struct StillBoard;
//!
//! impl ImuTransport for StillBoard {
//!     type Error = core::convert::Infallible;
//!
//!     fn read_who_am_i(&mut self) -> Result<u8, Self::Error> {
//!         Ok(0x6A)
//!     }
//!
//!     fn initialize(&mut self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn read_sample(&mut self) -> Result<SensorSample, Self::Error> {
//!         Ok(SensorSample::level(9.8))
//!     }
//! }
//! ```

use core::fmt::Debug;

use crate::types::SensorSample;

/// Source of IMU samples
pub trait ImuTransport {
    /// Bus or device error
    type Error: Debug;

    /// Read the identification register
    fn read_who_am_i(&mut self) -> Result<u8, Self::Error>;

    /// Configure the device for continuous measurement
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Read one accelerometer + gyroscope sample
    ///
    /// Blocks for as long as the bus transfer takes; that latency sets the
    /// tick rate.
    fn read_sample(&mut self) -> Result<SensorSample, Self::Error>;
}

impl<T: ImuTransport + ?Sized> ImuTransport for &mut T {
    type Error = T::Error;

    fn read_who_am_i(&mut self) -> Result<u8, Self::Error> {
        (**self).read_who_am_i()
    }

    fn initialize(&mut self) -> Result<(), Self::Error> {
        (**self).initialize()
    }

    fn read_sample(&mut self) -> Result<SensorSample, Self::Error> {
        (**self).read_sample()
    }
}
