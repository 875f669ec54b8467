//! Die temperature conversion

/// Offset of the temperature formula in °C
pub const TEMPERATURE_OFFSET_C: f32 = 35.0;

/// Temperature sensitivity in LSB/°C
pub const TEMPERATURE_SENSITIVITY: f32 = 340.0;

/// Convert a raw `TEMP_OUT` reading to degrees Celsius
///
/// `35 + raw / 340`, independent of any full-scale setting.
#[must_use]
pub fn temperature_celsius(raw: i16) -> f32 {
    TEMPERATURE_OFFSET_C + f32::from(raw) / TEMPERATURE_SENSITIVITY
}
