//! Sensor transports
//!
//! Concrete [`ImuTransport`](crate::traits::ImuTransport) implementations for
//! real hardware. Each driver is generic over the `embedded-hal` bus traits so
//! it runs on any HAL that implements them.

pub mod lsm6dsl;

pub use lsm6dsl::{DriverError, Lsm6dsl};
