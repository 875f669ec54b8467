#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

pub mod interrupt;
pub mod power;

// Re-export main types
pub use device::{AccelData, DriverConfig, GyroData, Mpu6050Driver, RawSample, Sample};
pub use interface::I2cInterface;
pub use sensors::{
    AccelCalibration, AccelDataG, AccelFullScale, DlpfMode, GyroDataDps, GyroFullScale,
};

pub use interrupt::{
    AccelHpf, CounterDecrement, InterruptConfig, InterruptPinConfig, InterruptStatus,
    MotionDetectionConfig, MotionDetectionControl, MotionStatus,
};
pub use power::{ClockSource, PowerMode, PowerStatus, SensorStandby, WakeFrequency};
pub use self_test::{Axis, SelfTestFailure, SelfTestReport, SelfTestSensor};

/// MPU-6050 I2C address when AD0 pin is low (default: 0x68)
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high (alternative: 0x69)
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of the `WHO_AM_I` register on a genuine MPU-6050
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// `WHO_AM_I` did not report the configured device address
    IdentityMismatch {
        /// Value the driver was configured to expect
        expected: u8,
        /// Value read back from the device
        found: u8,
    },
    /// The sensor answered but its self-test response is out of range
    SelfTestFailed(SelfTestFailure),
    /// Invalid configuration parameter
    InvalidConfig,
    /// Device is moving during calibration (spread exceeds threshold)
    DeviceMoving,
    /// Calibration reference cannot produce a correction
    InvalidCalibration,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {e:?}"),
            Self::IdentityMismatch { expected, found } => write!(
                f,
                "device identity mismatch: expected {expected:#04x}, found {found:#04x}"
            ),
            Self::SelfTestFailed(failure) => write!(
                f,
                "{:?} self-test failed on {:?} axis (response {})",
                failure.sensor, failure.axis, failure.response
            ),
            Self::InvalidConfig => f.write_str("invalid configuration"),
            Self::DeviceMoving => f.write_str("device moved during calibration"),
            Self::InvalidCalibration => f.write_str("calibration reference is degenerate"),
        }
    }
}
