#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod gyro;
pub mod interface;
pub mod power;
pub mod registers;

// Re-export main types
pub use device::{DataStatus, Fxas21002cDriver, SensorInfo, SensorKind, SensorReading};
pub use gyro::{GyroData, GyroDataDps, GyroDataRps, GyroOdr, GyroRange};
pub use interface::I2cInterface;
pub use power::PowerState;

/// FXAS21002C I2C address when the SA0 pin is high (default: 0x21)
///
/// This is the configuration of most breakout boards, where SA0 is pulled
/// up. Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x21;

/// FXAS21002C I2C address when the SA0 pin is tied low (alternative: 0x20)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x20;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0xD7;

/// Device name reported in the sensor descriptor
pub const SENSOR_NAME: &str = "FXAS21002C";

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
