//! Gyroscope types and the raw-to-physical conversion pipeline
//!
//! Provides the full-scale range and output-data-rate tables for the
//! FXAS21002C and the data types for raw and scaled angular-rate samples.

/// Conversion factor from degrees/second to radians/second
pub const DPS_TO_RADS: f32 = core::f32::consts::PI / 180.0;

/// Gyroscope full-scale range
///
/// Each range carries a fixed 2-bit register encoding and a fixed
/// sensitivity constant; the pair is a bijection over the variants and is
/// never derived from arbitrary runtime input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250°/s range
    Dps250,
    /// ±500°/s range
    Dps500,
    /// ±1000°/s range
    Dps1000,
    /// ±2000°/s range
    Dps2000,
}

impl GyroRange {
    /// Get the `CTRL_REG0` full-scale field encoding
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Dps250 => 0b11,
            Self::Dps500 => 0b10,
            Self::Dps1000 => 0b01,
            Self::Dps2000 => 0b00,
        }
    }

    /// Decode a `CTRL_REG0` full-scale field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b11 => Self::Dps250,
            0b10 => Self::Dps500,
            0b01 => Self::Dps1000,
            _ => Self::Dps2000,
        }
    }

    /// Get the sensitivity in (°/s)/LSB
    ///
    /// Multiplying a raw count by this constant yields degrees/second.
    /// Values from datasheet Table 35; note they give the device ~2.4 %
    /// headroom above the nominal range at full scale.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps250 => 0.0078125,  // (°/s)/LSB
            Self::Dps500 => 0.015625,   // (°/s)/LSB
            Self::Dps1000 => 0.03125,   // (°/s)/LSB
            Self::Dps2000 => 0.0625,    // (°/s)/LSB
        }
    }

    /// Get the nominal maximum value in °/s
    #[must_use]
    pub const fn max_dps(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    /// Get the nominal maximum value in rad/s
    #[must_use]
    pub const fn max_rads(self) -> f32 {
        self.max_dps() as f32 * DPS_TO_RADS
    }
}

/// Gyroscope output data rate
///
/// Encodings for the 3-bit data-rate field of `CTRL_REG1`. The all-ones
/// encoding is a second 12.5 Hz selection and decodes accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    /// 800 Hz
    Hz800 = 0b000,
    /// 400 Hz
    Hz400 = 0b001,
    /// 200 Hz
    Hz200 = 0b010,
    /// 100 Hz
    Hz100 = 0b011,
    /// 50 Hz
    Hz50 = 0b100,
    /// 25 Hz
    Hz25 = 0b101,
    /// 12.5 Hz
    Hz12_5 = 0b110,
}

impl GyroOdr {
    /// Get the `CTRL_REG1` data-rate field encoding
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a `CTRL_REG1` data-rate field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Hz800,
            0b001 => Self::Hz400,
            0b010 => Self::Hz200,
            0b011 => Self::Hz100,
            0b100 => Self::Hz50,
            0b101 => Self::Hz25,
            _ => Self::Hz12_5,
        }
    }

    /// Get the output data rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz800 => 800.0,
            Self::Hz400 => 400.0,
            Self::Hz200 => 200.0,
            Self::Hz100 => 100.0,
            Self::Hz50 => 50.0,
            Self::Hz25 => 25.0,
            Self::Hz12_5 => 12.5,
        }
    }

    /// Get the sample period in milliseconds
    #[must_use]
    pub const fn period_ms(self) -> f32 {
        1000.0 / self.hz()
    }

    /// Look up the data rate matching `hz` exactly
    ///
    /// Returns `None` for values outside the device's rate ladder.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_hz(hz: f32) -> Option<Self> {
        let rates = [
            Self::Hz800,
            Self::Hz400,
            Self::Hz200,
            Self::Hz100,
            Self::Hz50,
            Self::Hz25,
            Self::Hz12_5,
        ];
        rates.into_iter().find(|rate| rate.hz() == hz)
    }
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f32,
    /// Y-axis rotation rate in °/s
    pub y: f32,
    /// Z-axis rotation rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw axis values
    /// * `sensitivity` - Sensitivity in (°/s)/LSB (from [`GyroRange::sensitivity()`])
    #[must_use]
    pub fn from_raw(raw: GyroData, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw.x) * sensitivity,
            y: f32::from(raw.y) * sensitivity,
            z: f32::from(raw.z) * sensitivity,
        }
    }

    /// Convert to radians per second
    #[must_use]
    pub fn to_radians_per_sec(&self) -> GyroDataRps {
        GyroDataRps {
            x: self.x * DPS_TO_RADS,
            y: self.y * DPS_TO_RADS,
            z: self.z * DPS_TO_RADS,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Gyroscope data in radians per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataRps {
    /// X-axis rotation rate in rad/s
    pub x: f32,
    /// Y-axis rotation rate in rad/s
    pub y: f32,
    /// Z-axis rotation rate in rad/s
    pub z: f32,
}

impl GyroDataRps {
    /// Convert to degrees per second
    #[must_use]
    pub fn to_degrees_per_sec(&self) -> GyroDataDps {
        const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;
        GyroDataDps {
            x: self.x * RAD_TO_DEG,
            y: self.y * RAD_TO_DEG,
            z: self.z * RAD_TO_DEG,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
