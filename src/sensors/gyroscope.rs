//! Gyroscope sensor types and configuration
//!
//! Provides types and conversions for the MPU-6050's 3-axis gyroscope.

use super::raw_to_physical;

/// Sensitivity at ±250°/s, in LSB/(°/s)
const BASE_SENSITIVITY: f32 = 131.0;

/// Gyroscope divisor in LSB/(°/s) for a 2-bit full-scale select
///
/// 131 halved once per select step: 131, 65.5, 32.75, 16.375. Only the low
/// two bits of `select` are used.
#[must_use]
pub fn gyro_divisor(select: u8) -> f32 {
    BASE_SENSITIVITY / f32::from(1u8 << (select & 0x03))
}

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±250°/s range
    Dps250 = 0,
    /// ±500°/s range
    Dps500 = 1,
    /// ±1000°/s range
    Dps1000 = 2,
    /// ±2000°/s range (driver default)
    Dps2000 = 3,
}

impl GyroFullScale {
    /// Full scale for a 2-bit `FS_SEL` value (upper bits ignored)
    #[must_use]
    pub const fn from_select(select: u8) -> Self {
        match select & 0x03 {
            0 => Self::Dps250,
            1 => Self::Dps500,
            2 => Self::Dps1000,
            _ => Self::Dps2000,
        }
    }

    /// Full scale encoded in bits 3-4 of a `GYRO_CONFIG` value
    #[must_use]
    pub const fn from_register(value: u8) -> Self {
        Self::from_select(value >> 3)
    }

    /// Bits to place in `GYRO_CONFIG` to select this range
    #[must_use]
    pub const fn as_register(self) -> u8 {
        (self as u8) << 3
    }

    /// Get the divisor in LSB/(°/s)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub fn divisor(self) -> f32 {
        gyro_divisor(self as u8)
    }

    /// Get the maximum value in °/s
    #[must_use]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }
}

impl Default for GyroFullScale {
    fn default() -> Self {
        Self::Dps2000
    }
}

/// Gyroscope data in degrees per second
#[derive(Debug, Default, Clone, Copy, PartialEq)]
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
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `divisor` - Divisor in LSB/(°/s) (from `GyroFullScale::divisor()`)
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, divisor: f32) -> Self {
        Self {
            x: raw_to_physical(raw_x, divisor),
            y: raw_to_physical(raw_y, divisor),
            z: raw_to_physical(raw_z, divisor),
        }
    }

    /// Components as an `[x, y, z]` array
    #[must_use]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert to radians per second
    #[must_use]
    pub fn to_radians_per_sec(&self) -> GyroDataRps {
        const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
        GyroDataRps {
            x: self.x * DEG_TO_RAD,
            y: self.y * DEG_TO_RAD,
            z: self.z * DEG_TO_RAD,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Gyroscope data in radians per second
#[derive(Debug, Default, Clone, Copy, PartialEq)]
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
}
