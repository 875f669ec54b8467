//! High-level driver API for the MPU-6050
//!
//! This module owns the bus interface and the delay provider and implements
//! initialization, sample acquisition, register pass-through, sensor
//! configuration and the accelerometer calibration workflow. Self-test, power
//! management and interrupt operations live in their own modules as further
//! `impl` blocks on [`Mpu6050Driver`].

use crate::registers::{self, Mpu6050 as RegisterDevice, address};
use crate::sensors::{
    AccelCalibration, AccelDataG, AccelFullScale, DlpfMode, GyroDataDps, GyroFullScale,
    combine_bytes, temperature_celsius,
};
use crate::{Error, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

/// Largest per-axis spread (in g) tolerated while calibrating
///
/// Readings that move more than this between samples mean the device was not
/// held still, and the calibration is rejected with [`Error::DeviceMoving`].
pub const DEFAULT_MOTION_THRESHOLD_G: f32 = 0.05;

/// Default settle time after reset and wake commands, in milliseconds
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 100;

/// `PWR_MGMT_1` value for normal power on the internal oscillator
const PWR_MGMT_1_WAKE: u8 = 0x00;

/// `PWR_MGMT_2` value with every axis powered
const PWR_MGMT_2_ALL_ACTIVE: u8 = 0x00;

/// Register defaults written by [`Mpu6050Driver::init`], in order
///
/// Full sample rate, 5 Hz low pass filter, ±16 g and ±2000 °/s.
const DEFAULT_CONFIGURATION: [(u8, u8); 4] = [
    (address::SMPLRT_DIV, 0x00),
    (address::CONFIG, 0x06),
    (address::ACCEL_CONFIG, 0x18),
    (address::GYRO_CONFIG, 0x18),
];

/// Driver configuration
///
/// Everything here is fixed for the lifetime of a driver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Value the `WHO_AM_I` register must report for `init` to succeed
    pub device_address: u8,
    /// Issue a device reset at the start of `init`
    pub reset_on_init: bool,
    /// Delay after the reset and wake commands, in milliseconds
    pub settle_delay_ms: u32,
    /// Delay after each self-test configuration write, in milliseconds
    pub self_test_settle_ms: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            device_address: WHO_AM_I_VALUE,
            reset_on_init: true,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            self_test_settle_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl DriverConfig {
    /// Default configuration expecting `device_address` from `WHO_AM_I`
    #[must_use]
    pub const fn with_device_address(device_address: u8) -> Self {
        Self {
            device_address,
            reset_on_init: true,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            self_test_settle_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// One raw reading of the output registers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Accelerometer counts
    pub accel: AccelData,
    /// Temperature counts
    pub temperature: i16,
    /// Gyroscope counts
    pub gyro: GyroData,
}

impl RawSample {
    /// Decode the 14 output registers (0x3B-0x48), high byte first
    #[must_use]
    pub const fn from_registers(regs: &[u8; registers::OUTPUT_REGISTER_COUNT]) -> Self {
        Self {
            accel: AccelData {
                x: combine_bytes(regs[0], regs[1]),
                y: combine_bytes(regs[2], regs[3]),
                z: combine_bytes(regs[4], regs[5]),
            },
            temperature: combine_bytes(regs[6], regs[7]),
            gyro: GyroData {
                x: combine_bytes(regs[8], regs[9]),
                y: combine_bytes(regs[10], regs[11]),
                z: combine_bytes(regs[12], regs[13]),
            },
        }
    }
}

/// One converted sensor reading
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Die temperature in °C
    pub temperature: f32,
    /// Acceleration in g
    pub accel: AccelDataG,
    /// Angular rate in °/s
    pub gyro: GyroDataDps,
}

impl Sample {
    /// Convert a raw reading using the given full-scale ranges
    #[must_use]
    pub fn from_raw(raw: &RawSample, accel_scale: AccelFullScale, gyro_scale: GyroFullScale) -> Self {
        Self {
            temperature: temperature_celsius(raw.temperature),
            accel: AccelDataG::from_raw(raw.accel.x, raw.accel.y, raw.accel.z, accel_scale.divisor()),
            gyro: GyroDataDps::from_raw(raw.gyro.x, raw.gyro.y, raw.gyro.z, gyro_scale.divisor()),
        }
    }

    /// Acceleration as `[x, y, z]` in g
    #[must_use]
    pub const fn accel_array(&self) -> [f32; 3] {
        self.accel.to_array()
    }

    /// Angular rate as `[x, y, z]` in °/s
    #[must_use]
    pub const fn gyro_array(&self) -> [f32; 3] {
        self.gyro.to_array()
    }
}

/// Main driver for the MPU-6050
///
/// Owns the register interface and the delay provider. Construction does not
/// touch the bus; call [`init`](Self::init) before acquiring samples.
pub struct Mpu6050Driver<I, D> {
    pub(crate) device: RegisterDevice<I>,
    pub(crate) delay: D,
    pub(crate) config: DriverConfig,
    accel_calibration: AccelCalibration,
}

impl<I, D> Mpu6050Driver<I, D>
where
    I: RegisterInterface<AddressType = u8>,
    D: DelayNs,
{
    /// Create a new MPU-6050 driver with the default configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Mpu6050Driver::new(interface, delay);
    /// imu.init(&[])?;
    /// ```
    pub fn new(interface: I, delay: D) -> Self {
        Self::with_config(interface, delay, DriverConfig::default())
    }

    /// Create a new MPU-6050 driver with an explicit configuration
    pub fn with_config(interface: I, delay: D, config: DriverConfig) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            delay,
            config,
            accel_calibration: AccelCalibration::default(),
        }
    }

    /// The configuration this driver was built with
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Initialize the device
    ///
    /// Resets the device (unless disabled in [`DriverConfig`]), wakes it,
    /// checks `WHO_AM_I`, writes the driver defaults (full sample rate, 5 Hz
    /// low pass filter, ±16 g, ±2000 °/s), applies `init_sequence` in order and
    /// finally powers every axis.
    ///
    /// # Arguments
    ///
    /// * `init_sequence` - Extra `(register, value)` writes applied after the
    ///   defaults. May be empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentityMismatch`] if `WHO_AM_I` does not match the
    /// configured device address, in which case nothing past the wake command
    /// is written. Any bus failure aborts the sequence with [`Error::Bus`].
    pub fn init(&mut self, init_sequence: &[(u8, u8)]) -> Result<(), Error<I::Error>> {
        if self.config.reset_on_init {
            self.write_command(address::PWR_MGMT_1, registers::PWR_MGMT_1_DEVICE_RESET)?;
            self.delay.delay_ms(self.config.settle_delay_ms);
        }

        self.write_command(address::PWR_MGMT_1, PWR_MGMT_1_WAKE)?;
        self.delay.delay_ms(self.config.settle_delay_ms);

        let found = self.read_who_am_i()?;
        if found != self.config.device_address {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "MPU-6050 identity mismatch: expected {=u8:#x}, found {=u8:#x}",
                self.config.device_address,
                found
            );
            return Err(Error::IdentityMismatch {
                expected: self.config.device_address,
                found,
            });
        }

        for (register, value) in DEFAULT_CONFIGURATION {
            self.write_command(register, value)?;
        }

        for &(register, value) in init_sequence {
            self.write_command(register, value)?;
        }

        self.write_command(address::PWR_MGMT_2, PWR_MGMT_2_ALL_ACTIVE)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "MPU-6050 initialized ({} extra register writes)",
            init_sequence.len()
        );

        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x68 for a genuine MPU-6050, whatever the AD0 pin level.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Read the output registers without converting them
    ///
    /// The 14 registers from `ACCEL_XOUT_H` to `GYRO_ZOUT_L` are read one at a
    /// time, in address order.
    ///
    /// # Errors
    ///
    /// Returns an error if any register read fails.
    pub fn read_raw_sample(&mut self) -> Result<RawSample, Error<I::Error>> {
        let mut regs = [0u8; registers::OUTPUT_REGISTER_COUNT];
        for (register, slot) in (address::ACCEL_XOUT_H..=address::GYRO_ZOUT_L).zip(regs.iter_mut())
        {
            *slot = self.read_register(register)?;
        }
        Ok(RawSample::from_registers(&regs))
    }

    /// Acquire one sample in physical units
    ///
    /// Reads the output registers, then the current accelerometer and
    /// gyroscope full-scale settings, and converts with the ranges that are
    /// active right now. No calibration is applied; see
    /// [`acquire_calibrated_sample`](Self::acquire_calibrated_sample).
    ///
    /// # Errors
    ///
    /// Returns an error if any register read fails. No partial sample is
    /// produced.
    pub fn acquire_sample(&mut self) -> Result<Sample, Error<I::Error>> {
        let raw = self.read_raw_sample()?;
        let accel_scale = self.accel_full_scale()?;
        let gyro_scale = self.gyro_full_scale()?;
        Ok(Sample::from_raw(&raw, accel_scale, gyro_scale))
    }

    /// Acquire one sample and apply the stored accelerometer calibration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acquire_calibrated_sample(&mut self) -> Result<Sample, Error<I::Error>> {
        let sample = self.acquire_sample()?;
        Ok(self.apply_calibration(sample))
    }

    /// Write one register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_command(&mut self, register: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.device.interface.write_register(register, 8, &[value])?;
        Ok(())
    }

    /// Read one register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<I::Error>> {
        let mut buffer = [0u8; 1];
        self.device.interface.read_register(register, 8, &mut buffer)?;
        Ok(buffer[0])
    }

    /// Read the active accelerometer full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_full_scale(&mut self) -> Result<AccelFullScale, Error<I::Error>> {
        let reg = self.device.accel_config().read()?;
        Ok(AccelFullScale::from_select(reg.afs_sel()))
    }

    /// Select the accelerometer full-scale range
    ///
    /// Self-test and high pass filter bits are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_full_scale(&mut self, scale: AccelFullScale) -> Result<(), Error<I::Error>> {
        self.device.accel_config().modify(|w| {
            w.set_afs_sel(scale as u8);
        })?;
        Ok(())
    }

    /// Read the active gyroscope full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_full_scale(&mut self) -> Result<GyroFullScale, Error<I::Error>> {
        let reg = self.device.gyro_config().read()?;
        Ok(GyroFullScale::from_select(reg.fs_sel()))
    }

    /// Select the gyroscope full-scale range
    ///
    /// Self-test bits are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_full_scale(&mut self, scale: GyroFullScale) -> Result<(), Error<I::Error>> {
        self.device.gyro_config().modify(|w| {
            w.set_fs_sel(scale as u8);
        })?;
        Ok(())
    }

    /// Configure the digital low pass filter
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_dlpf_mode(&mut self, mode: DlpfMode) -> Result<(), Error<I::Error>> {
        self.device.configuration().modify(|w| {
            w.set_dlpf_cfg(mode as u8);
        })?;
        Ok(())
    }

    /// Set the sample rate divider
    ///
    /// Sample rate = gyroscope output rate / (1 + `divider`).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.device.smplrt_div().write(|w| {
            w.set_smplrt_div(divider);
        })?;
        Ok(())
    }

    /// Calculate the effective sample rate in Hz from the device registers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sample_rate_hz(&mut self) -> Result<f32, Error<I::Error>> {
        let dlpf_cfg = self.device.configuration().read()?.dlpf_cfg();
        let divider = self.device.smplrt_div().read()?.smplrt_div();

        // DLPF_CFG 7 is reserved and behaves like the unfiltered mode
        let output_rate = DlpfMode::from_bits(dlpf_cfg)
            .map_or(8000, DlpfMode::gyro_output_rate_hz);

        Ok(f32::from(output_rate) / (1.0 + f32::from(divider)))
    }

    /// Set accelerometer calibration
    pub const fn set_accelerometer_calibration(&mut self, calibration: AccelCalibration) {
        self.accel_calibration = calibration;
    }

    /// Get current accelerometer calibration
    pub const fn accelerometer_calibration(&self) -> &AccelCalibration {
        &self.accel_calibration
    }

    /// Apply the stored accelerometer calibration to a sample
    ///
    /// Temperature and gyroscope values pass through unchanged.
    #[must_use]
    pub fn apply_calibration(&self, sample: Sample) -> Sample {
        Sample {
            accel: self.accel_calibration.apply(sample.accel),
            ..sample
        }
    }

    /// Calibrate the accelerometer against gravity
    ///
    /// The device must be stationary on a level surface with the Z axis
    /// pointing up. The resulting calibration is stored and returned.
    ///
    /// # Arguments
    ///
    /// * `samples` - Number of samples to average (more samples = better accuracy)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or if the device
    /// is moving during calibration.
    pub fn calibrate_accelerometer(
        &mut self,
        samples: u16,
    ) -> Result<AccelCalibration, Error<I::Error>> {
        let gravity = AccelDataG {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        };
        self.calibrate_accelerometer_with_reference(samples, gravity, DEFAULT_MOTION_THRESHOLD_G)
    }

    /// Calibrate the accelerometer against a known stationary reading
    ///
    /// Averages `samples` acquisitions and derives a per-axis scale that maps
    /// the average onto `expected` (see [`AccelCalibration::from_reference`]).
    /// The calibration is stored and returned.
    ///
    /// # Arguments
    ///
    /// * `samples` - Number of samples to average
    /// * `expected` - Acceleration the device should report in its current pose
    /// * `max_spread_g` - Largest allowed min-to-max spread on any axis
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if `samples` is zero or `max_spread_g` is
    ///   negative or NaN
    /// - [`Error::DeviceMoving`] if any axis spread exceeds `max_spread_g`
    /// - [`Error::InvalidCalibration`] if the average cannot be mapped onto
    ///   `expected`
    /// - [`Error::Bus`] if communication with the device fails
    pub fn calibrate_accelerometer_with_reference(
        &mut self,
        samples: u16,
        expected: AccelDataG,
        max_spread_g: f32,
    ) -> Result<AccelCalibration, Error<I::Error>> {
        if samples == 0 || max_spread_g.is_nan() || max_spread_g < 0.0 {
            return Err(Error::InvalidConfig);
        }

        let mut sum = [0.0f32; 3];
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for _ in 0..samples {
            let reading = self.acquire_sample()?.accel_array();
            for axis in 0..3 {
                sum[axis] += reading[axis];
                min[axis] = min[axis].min(reading[axis]);
                max[axis] = max[axis].max(reading[axis]);
            }
        }

        if (0..3).any(|axis| max[axis] - min[axis] > max_spread_g) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Accelerometer calibration rejected: device moving");
            return Err(Error::DeviceMoving);
        }

        let count = f32::from(samples);
        let average = AccelDataG {
            x: sum[0] / count,
            y: sum[1] / count,
            z: sum[2] / count,
        };

        let calibration =
            AccelCalibration::from_reference(average, expected).ok_or(Error::InvalidCalibration)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Accelerometer calibrated: scale = ({}, {}, {})",
            calibration.scale_x,
            calibration.scale_y,
            calibration.scale_z
        );

        self.accel_calibration = calibration;
        Ok(calibration)
    }

    /// Consume the driver and return the interface and the delay provider
    pub fn release(self) -> (I, D) {
        (self.device.interface, self.delay)
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}
