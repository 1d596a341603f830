//! Bus interface implementation for the FXAS21002C
//!
//! This module provides the `device-driver` trait implementation for I2C
//! communication with the FXAS21002C. The interface owns the bus
//! peripheral and the device address; the driver owns the interface.

use crate::I2C_ADDRESS_SA0_HIGH;

use device_driver::RegisterInterface;

/// I2C interface for the FXAS21002C
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x21, SA0 pin HIGH)
    ///
    /// This is the most common configuration; breakout boards typically
    /// pull SA0 up.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with the alternative address (0x20, SA0 pin LOW)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// For standard FXAS21002C configurations, prefer
    /// [`default()`](Self::default) or [`alternative()`](Self::alternative).
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Create a buffer with address + data
        let mut buffer = [0u8; 9]; // Max: 1 address + 8 data bytes
        buffer[0] = address;
        let len = write_data.len().min(8);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}
