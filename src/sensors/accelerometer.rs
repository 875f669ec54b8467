//! Accelerometer sensor types and configuration
//!
//! Provides the full-scale selector, the g-unit data type and the optional
//! multiplicative correction for the MPU-6050's 3-axis accelerometer.

use super::raw_to_physical;

/// Reference components smaller than this are not excited by gravity and
/// keep a unit scale
const MIN_REFERENCE_G: f32 = 0.5;

/// Measured components smaller than this cannot anchor a correction
const MIN_MEASURED_G: f32 = 0.1;

/// Accelerometer divisor in LSB/g for a 2-bit full-scale select
///
/// `16384 >> select`: 16384, 8192, 4096, 2048 for selects 0..=3. Only the
/// low two bits of `select` are used.
#[must_use]
pub fn accel_divisor(select: u8) -> f32 {
    f32::from(16384u16 >> (select & 0x03))
}

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range (used by the self-test)
    G8 = 2,
    /// ±16g range (least sensitive, most range, driver default)
    G16 = 3,
}

impl AccelFullScale {
    /// Full scale for a 2-bit `AFS_SEL` value (upper bits ignored)
    #[must_use]
    pub const fn from_select(select: u8) -> Self {
        match select & 0x03 {
            0 => Self::G2,
            1 => Self::G4,
            2 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Full scale encoded in bits 3-4 of an `ACCEL_CONFIG` value
    #[must_use]
    pub const fn from_register(value: u8) -> Self {
        Self::from_select(value >> 3)
    }

    /// Bits to place in `ACCEL_CONFIG` to select this range
    #[must_use]
    pub const fn as_register(self) -> u8 {
        (self as u8) << 3
    }

    /// Get the divisor in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub fn divisor(self) -> f32 {
        accel_divisor(self as u8)
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

impl Default for AccelFullScale {
    fn default() -> Self {
        Self::G16
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `divisor` - Divisor in LSB/g (from `AccelFullScale::divisor()`)
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

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Accelerometer correction: a per-axis multiplicative scale
///
/// Derived from a reading taken while the sensor is stationary and aligned
/// with gravity. It is never applied implicitly; see
/// [`Mpu6050Driver::apply_calibration`](crate::Mpu6050Driver::apply_calibration).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelCalibration {
    /// Scale factor for X-axis
    pub scale_x: f32,
    /// Scale factor for Y-axis
    pub scale_y: f32,
    /// Scale factor for Z-axis
    pub scale_z: f32,
}

impl Default for AccelCalibration {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
        }
    }
}

impl AccelCalibration {
    /// Per-axis scale mapping `measured` onto `expected`
    ///
    /// Axes whose expected component is below 0.5 g are not excited by gravity
    /// and keep a scale of 1.0. Returns `None` when an excited axis measured
    /// less than 0.1 g or pointed the opposite way.
    #[must_use]
    pub fn from_reference(measured: AccelDataG, expected: AccelDataG) -> Option<Self> {
        Some(Self {
            scale_x: axis_scale(measured.x, expected.x)?,
            scale_y: axis_scale(measured.y, expected.y)?,
            scale_z: axis_scale(measured.z, expected.z)?,
        })
    }

    /// Uniform scale mapping the magnitude of `measured` onto `reference_g`
    #[must_use]
    pub fn from_magnitude(measured: AccelDataG, reference_g: f32) -> Option<Self> {
        let magnitude = measured.magnitude();
        if magnitude < MIN_MEASURED_G {
            return None;
        }
        let scale = reference_g / magnitude;
        Some(Self {
            scale_x: scale,
            scale_y: scale,
            scale_z: scale,
        })
    }

    /// True when this calibration leaves readings unchanged
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1.0 && self.scale_y == 1.0 && self.scale_z == 1.0
    }

    /// Apply calibration to accelerometer data
    #[must_use]
    pub fn apply(&self, data: AccelDataG) -> AccelDataG {
        AccelDataG {
            x: data.x * self.scale_x,
            y: data.y * self.scale_y,
            z: data.z * self.scale_z,
        }
    }
}

fn axis_scale(measured: f32, expected: f32) -> Option<f32> {
    if libm::fabsf(expected) < MIN_REFERENCE_G {
        return Some(1.0);
    }
    if libm::fabsf(measured) < MIN_MEASURED_G || measured * expected < 0.0 {
        return None;
    }
    Some(expected / measured)
}
