//! Digital low pass filter settings (`CONFIG.DLPF_CFG`)

/// Digital low pass filter configuration shared by accelerometer and gyroscope
///
/// Bandwidths are the accelerometer figures from the datasheet. Mode 0 runs
/// the gyroscope output at 8 kHz, every other mode at 1 kHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfMode {
    /// 260 Hz bandwidth (filter effectively off)
    Hz260 = 0,
    /// 184 Hz bandwidth
    Hz184 = 1,
    /// 94 Hz bandwidth
    Hz94 = 2,
    /// 44 Hz bandwidth
    Hz44 = 3,
    /// 21 Hz bandwidth
    Hz21 = 4,
    /// 10 Hz bandwidth
    Hz10 = 5,
    /// 5 Hz bandwidth (driver default)
    Hz5 = 6,
}

impl DlpfMode {
    /// Mode for a 3-bit `DLPF_CFG` value
    ///
    /// Returns `None` for the reserved value 7.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(Self::Hz260),
            1 => Some(Self::Hz184),
            2 => Some(Self::Hz94),
            3 => Some(Self::Hz44),
            4 => Some(Self::Hz21),
            5 => Some(Self::Hz10),
            6 => Some(Self::Hz5),
            _ => None,
        }
    }

    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz260 => 260,
            Self::Hz184 => 184,
            Self::Hz94 => 94,
            Self::Hz44 => 44,
            Self::Hz21 => 21,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }

    /// Gyroscope output rate in Hz before `SMPLRT_DIV` is applied
    #[must_use]
    pub const fn gyro_output_rate_hz(self) -> u16 {
        match self {
            Self::Hz260 => 8000,
            _ => 1000,
        }
    }
}

impl Default for DlpfMode {
    fn default() -> Self {
        Self::Hz5
    }
}
