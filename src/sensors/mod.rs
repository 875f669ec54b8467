//! Sensor types and unit conversion for the MPU-6050
//!
//! Everything in here is pure: full-scale selectors and their divisors, the
//! raw-to-physical conversion, the temperature formula, the on-chip low pass
//! filter settings and the optional accelerometer correction. Register I/O
//! lives in [`crate::device`].

pub mod accelerometer;
pub mod dlpf;
pub mod gyroscope;
pub mod temperature;

// Re-export main types
pub use accelerometer::{AccelCalibration, AccelDataG, AccelFullScale, accel_divisor};
pub use dlpf::DlpfMode;
pub use gyroscope::{GyroDataDps, GyroDataRps, GyroFullScale, gyro_divisor};
pub use temperature::temperature_celsius;

/// Combine a high and a low output register into a signed 16-bit value
///
/// The MPU-6050 stores every output value big-endian: high byte first.
#[must_use]
pub const fn combine_bytes(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

/// Convert a raw signed reading into physical units
///
/// `divisor` is the sensitivity in LSB per unit for the active full scale,
/// e.g. [`AccelFullScale::divisor`] or [`GyroFullScale::divisor`].
#[must_use]
pub fn raw_to_physical(raw: i16, divisor: f32) -> f32 {
    f32::from(raw) / divisor
}
