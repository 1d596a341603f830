//! High-level driver API for the FXAS21002C
//!
//! This module provides the user-facing interface to the FXAS21002C
//! gyroscope: bring-up, range and data-rate configuration, power
//! management and sample reading.

use device_driver::RegisterInterface;

use crate::gyro::{GyroData, GyroDataDps, GyroDataRps, GyroOdr, GyroRange};
use crate::power::{PowerState, MODE_ACTIVE, MODE_STANDBY};
use crate::registers::RegisterDevice;
use crate::{Error, SENSOR_NAME, WHO_AM_I_VALUE};

/// Settle time after a mode or reset transition, in milliseconds
///
/// The datasheet requires 60 ms plus one sample period before output data
/// is valid after a standby-to-active transition; a conservative fixed
/// 100 ms covers every supported data rate down to 25 Hz and matches the
/// device's boot time after reset. Do not shorten this without re-deriving
/// the settle-time requirement.
const SETTLE_TIME_MS: u32 = 100;

/// Data rate programmed during bring-up
const DEFAULT_ODR: GyroOdr = GyroOdr::Hz100;

/// STATUS register address with the auto-increment flag (bit 7) set
///
/// Reading from this address bursts over STATUS and the six axis bytes.
const STATUS_BURST_ADDR: u8 = 0x80;

/// Kind of measurement a reading or descriptor refers to
///
/// This device only ever reports angular velocity; the tag exists so
/// readings can be routed in caller code that handles several sensor
/// families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// 3-axis angular velocity in rad/s
    Gyroscope,
}

/// Angular-velocity reading in physical units
///
/// Produced by [`Fxas21002cDriver::read_sample`]; rates are in rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Identifier of the driver instance that produced the reading
    pub sensor_id: i32,
    /// Measurement kind, always [`SensorKind::Gyroscope`]
    pub kind: SensorKind,
    /// Caller-supplied monotonic timestamp in milliseconds
    pub timestamp_ms: u32,
    /// Angular velocity in rad/s
    pub rates: GyroDataRps,
}

/// Sensor descriptor
///
/// Static description of the device and its currently measurable range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorInfo {
    /// Device name
    pub name: &'static str,
    /// Descriptor version
    pub version: u32,
    /// Identifier of the driver instance
    pub sensor_id: i32,
    /// Measurement kind, always [`SensorKind::Gyroscope`]
    pub kind: SensorKind,
    /// Smallest measurable value in rad/s (negative full scale)
    pub min_value: f32,
    /// Largest measurable value in rad/s (positive full scale)
    pub max_value: f32,
    /// Resolution in rad/s (unspecified by the datasheet, reported as 0)
    pub resolution: f32,
}

/// Decoded STATUS register flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct DataStatus {
    /// X-axis sample ready
    pub x_ready: bool,
    /// Y-axis sample ready
    pub y_ready: bool,
    /// Z-axis sample ready
    pub z_ready: bool,
    /// Samples ready on all three axes
    pub all_ready: bool,
    /// One or more axes were overwritten before being read
    pub overrun: bool,
}

/// Main driver for the FXAS21002C
///
/// Owns exactly one bus interface. All operations take `&mut self`; the
/// driver is fully synchronous and assumes exclusive access to the device
/// for the duration of each call.
pub struct Fxas21002cDriver<I> {
    device: RegisterDevice<I>,
    sensor_id: i32,
    range: GyroRange,
    odr_hz: f32,
    state: PowerState,
    last_raw: GyroData,
}

impl<I> Fxas21002cDriver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new FXAS21002C driver instance
    ///
    /// This verifies the `WHO_AM_I` register but does not touch any other
    /// register. Call [`init()`](Self::init) after construction to reset
    /// and configure the device.
    ///
    /// `sensor_id` is an arbitrary caller-chosen identifier reported back
    /// in every [`SensorReading`] and in the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn new(interface: I, sensor_id: i32) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self {
            device,
            sensor_id,
            range: GyroRange::Dps250,
            odr_hz: DEFAULT_ODR.hz(),
            state: PowerState::Unknown,
            last_raw: GyroData { x: 0, y: 0, z: 0 },
        };

        // Verify WHO_AM_I; a mismatch means a wrong address or an absent
        // device, and nothing else is attempted
        let who_am_i = driver.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        Ok(driver)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0xD7 for a valid FXAS21002C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Reset and configure the device, leaving it active
    ///
    /// Sequence: force standby, issue a soft reset, program the full-scale
    /// range, then switch to active at the default 100 Hz data rate and
    /// block for the settle time. The range field may only be written
    /// while the mode bits are zero, which is why standby/reset come
    /// first; the ordering is load-bearing.
    ///
    /// # Arguments
    ///
    /// * `range` - Full-scale range to measure with
    /// * `delay` - Delay provider used for the post-activation settle wait
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init<D>(&mut self, range: GyroRange, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        // Force standby so the configuration registers may be written
        self.device.ctrl_reg_1().write(|w| {
            w.set_mode(MODE_STANDBY);
        })?;
        self.state = PowerState::Standby;

        // Soft reset; the device clears the bit itself once it has rebooted
        self.device.ctrl_reg_1().write(|w| {
            w.set_soft_reset(true);
        })?;
        self.state = PowerState::Resetting;

        // Full-scale selection, legal while in standby/reset
        self.device.ctrl_reg_0().write(|w| {
            w.set_fs(range.bits());
        })?;
        self.range = range;

        // Switch to active at the default data rate
        self.device.ctrl_reg_1().write(|w| {
            w.set_dr(DEFAULT_ODR.bits());
            w.set_mode(MODE_ACTIVE);
        })?;
        self.odr_hz = DEFAULT_ODR.hz();

        // Output data is not valid until the transition time has passed
        delay.delay_ms(SETTLE_TIME_MS);
        self.state = PowerState::Active;

        Ok(())
    }

    /// Set the full-scale range
    ///
    /// The device is moved to standby around the range write: the
    /// full-scale field must never change while the mode bits are set, and
    /// the mode bits are restored last. The pre-call power state is
    /// preserved, so calling this while active returns the device to
    /// active and calling it from standby leaves it in standby.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_range(&mut self, range: GyroRange) -> Result<(), Error<I::Error>> {
        let mode = self.device.ctrl_reg_1().read()?.mode();

        self.device.ctrl_reg_1().modify(|w| {
            w.set_mode(MODE_STANDBY);
        })?;
        self.device.ctrl_reg_0().modify(|w| {
            w.set_fs(range.bits());
        })?;
        self.device.ctrl_reg_1().modify(|w| {
            w.set_mode(mode);
        })?;

        self.range = range;
        Ok(())
    }

    /// Get the currently configured full-scale range
    #[must_use]
    pub const fn range(&self) -> GyroRange {
        self.range
    }

    /// Set the output data rate in Hz
    ///
    /// Valid rates are 800, 400, 200, 100, 50, 25 and 12.5 Hz. The data
    /// rate field shares `CTRL_REG1` with the mode bits, so the write is
    /// bracketed by standby exactly like [`set_range`](Self::set_range).
    ///
    /// The stored rate returned by [`odr_hz()`](Self::odr_hz) is updated
    /// even when `hz` matches no supported rate; in that case the register
    /// keeps its previous rate and the reported value diverges from the
    /// hardware until a supported rate is set.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_odr(&mut self, hz: f32) -> Result<(), Error<I::Error>> {
        self.odr_hz = hz;

        let odr = match GyroOdr::from_hz(hz) {
            Some(odr) => odr,
            None => return Ok(()),
        };

        let mode = self.device.ctrl_reg_1().read()?.mode();

        self.device.ctrl_reg_1().modify(|w| {
            w.set_mode(MODE_STANDBY);
        })?;
        self.device.ctrl_reg_1().modify(|w| {
            w.set_dr(odr.bits());
        })?;
        self.device.ctrl_reg_1().modify(|w| {
            w.set_mode(mode);
        })?;

        Ok(())
    }

    /// Get the output data rate in Hz as last requested
    ///
    /// Reports the stored value from the last [`set_odr`](Self::set_odr)
    /// call (or the bring-up default), which can differ from the rate the
    /// hardware is running at if an unsupported value was requested.
    #[must_use]
    pub const fn odr_hz(&self) -> f32 {
        self.odr_hz
    }

    /// Move the device into or out of standby
    ///
    /// Entering standby additionally blocks for the settle time before
    /// returning; leaving standby returns as soon as the mode bits are
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn standby<D>(&mut self, enter: bool, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let mode = if enter { MODE_STANDBY } else { MODE_ACTIVE };
        self.device.ctrl_reg_1().modify(|w| {
            w.set_mode(mode);
        })?;

        if enter {
            delay.delay_ms(SETTLE_TIME_MS);
            self.state = PowerState::Standby;
        } else {
            self.state = PowerState::Active;
        }

        Ok(())
    }

    /// Get the driver-tracked power state
    #[must_use]
    pub const fn power_state(&self) -> PowerState {
        self.state
    }

    /// Read a raw gyroscope sample
    ///
    /// Issues a single 7-byte burst read (status byte plus three
    /// big-endian axis pairs) starting at STATUS with the auto-increment
    /// flag set, so all axes come from the same sample. A failed
    /// transaction is reported as [`Error::Bus`]; no partial data is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        let mut buffer = [0u8; 7];
        self.device
            .interface
            .read_register(STATUS_BURST_ADDR, 56, &mut buffer)?;

        let data = GyroData {
            x: i16::from_be_bytes([buffer[1], buffer[2]]),
            y: i16::from_be_bytes([buffer[3], buffer[4]]),
            z: i16::from_be_bytes([buffer[5], buffer[6]]),
        };
        self.last_raw = data;

        Ok(data)
    }

    /// Read a calibrated angular-velocity sample
    ///
    /// Reads the raw axis block and scales it by the active range's
    /// sensitivity into rad/s. The timestamp is caller-supplied and must
    /// come from a monotonic clock; the crate owns no time source.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_sample(&mut self, timestamp_ms: u32) -> Result<SensorReading, Error<I::Error>> {
        let raw = self.read_raw()?;
        let dps = GyroDataDps::from_raw(raw, self.range.sensitivity());

        Ok(SensorReading {
            sensor_id: self.sensor_id,
            kind: SensorKind::Gyroscope,
            timestamp_ms,
            rates: dps.to_radians_per_sec(),
        })
    }

    /// Read and decode the STATUS register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status(&mut self) -> Result<DataStatus, Error<I::Error>> {
        let reg = self.device.status().read()?;
        Ok(DataStatus {
            x_ready: reg.xdr(),
            y_ready: reg.ydr(),
            z_ready: reg.zdr(),
            all_ready: reg.zyxdr(),
            overrun: reg.zyxow(),
        })
    }

    /// Get the descriptor for this device
    ///
    /// The measurable range follows the configured full-scale range,
    /// expressed in rad/s.
    #[must_use]
    pub fn sensor_info(&self) -> SensorInfo {
        SensorInfo {
            name: SENSOR_NAME,
            version: 1,
            sensor_id: self.sensor_id,
            kind: SensorKind::Gyroscope,
            min_value: -self.range.max_rads(),
            max_value: self.range.max_rads(),
            resolution: 0.0,
        }
    }

    /// Get the raw values from the last sensor read
    #[must_use]
    pub const fn raw(&self) -> GyroData {
        self.last_raw
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }
}
