//! Power management and low-power modes
//!
//! The MPU-6050 has three power states:
//! - **Normal**: every enabled sensor sampled continuously
//! - **Cycle**: sleeps and wakes at a fixed rate to take a single
//!   accelerometer sample (gyroscope in standby)
//! - **Sleep**: minimum power, no sampling
//!
//! Individual axes can additionally be put in standby through `PWR_MGMT_2`.
//!
//! # Example
//!
//! ```ignore
//! # use mpu6050::{Mpu6050Driver, power::WakeFrequency};
//! # let mut imu: Mpu6050Driver<_, _> = todo!();
//! // Accelerometer-only sampling at 5 Hz
//! imu.enter_cycle_mode(WakeFrequency::Hz5)?;
//! // ...
//! imu.exit_cycle_mode()?;
//! # Ok::<(), mpu6050::Error<()>>(())
//! ```

use crate::{Error, Mpu6050Driver};

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

/// Power mode reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Normal operation mode - all enabled sensors sampled
    Normal,
    /// Cycle mode - periodic single accelerometer samples
    Cycle,
    /// Sleep mode - minimum power consumption
    Sleep,
}

/// Clock source selection (`PWR_MGMT_1.CLKSEL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 8 MHz oscillator
    Internal = 0,
    /// PLL with X-axis gyroscope reference
    PllGyroX = 1,
    /// PLL with Y-axis gyroscope reference
    PllGyroY = 2,
    /// PLL with Z-axis gyroscope reference
    PllGyroZ = 3,
    /// PLL with external 32.768 kHz reference
    PllExternal32k = 4,
    /// PLL with external 19.2 MHz reference
    PllExternal19M = 5,
    /// Stop clock and keep timing generator in reset
    Stopped = 7,
}

impl ClockSource {
    /// Clock source for a 3-bit `CLKSEL` value
    ///
    /// Returns `None` for the reserved value 6.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(Self::Internal),
            1 => Some(Self::PllGyroX),
            2 => Some(Self::PllGyroY),
            3 => Some(Self::PllGyroZ),
            4 => Some(Self::PllExternal32k),
            5 => Some(Self::PllExternal19M),
            7 => Some(Self::Stopped),
            _ => None,
        }
    }
}

/// Wake-up rate in cycle mode (`PWR_MGMT_2.LP_WAKE_CTRL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeFrequency {
    /// 1.25 Hz
    Hz1_25 = 0,
    /// 5 Hz
    Hz5 = 1,
    /// 20 Hz
    Hz20 = 2,
    /// 40 Hz
    Hz40 = 3,
}

impl WakeFrequency {
    /// Wake frequency for a 2-bit `LP_WAKE_CTRL` value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Hz1_25,
            1 => Self::Hz5,
            2 => Self::Hz20,
            _ => Self::Hz40,
        }
    }

    /// Get the wake-up rate in Hz
    #[must_use]
    pub const fn rate_hz(self) -> f32 {
        match self {
            Self::Hz1_25 => 1.25,
            Self::Hz5 => 5.0,
            Self::Hz20 => 20.0,
            Self::Hz40 => 40.0,
        }
    }
}

/// Per-axis standby flags (`true` = axis in standby)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct SensorStandby {
    /// Accelerometer X-axis in standby
    pub accel_x: bool,
    /// Accelerometer Y-axis in standby
    pub accel_y: bool,
    /// Accelerometer Z-axis in standby
    pub accel_z: bool,
    /// Gyroscope X-axis in standby
    pub gyro_x: bool,
    /// Gyroscope Y-axis in standby
    pub gyro_y: bool,
    /// Gyroscope Z-axis in standby
    pub gyro_z: bool,
}

impl SensorStandby {
    /// Every axis powered
    #[must_use]
    pub const fn all_active() -> Self {
        Self {
            accel_x: false,
            accel_y: false,
            accel_z: false,
            gyro_x: false,
            gyro_y: false,
            gyro_z: false,
        }
    }

    /// Gyroscope in standby, accelerometer powered
    #[must_use]
    pub const fn gyro_standby() -> Self {
        Self {
            gyro_x: true,
            gyro_y: true,
            gyro_z: true,
            ..Self::all_active()
        }
    }

    /// Accelerometer in standby, gyroscope powered
    #[must_use]
    pub const fn accel_standby() -> Self {
        Self {
            accel_x: true,
            accel_y: true,
            accel_z: true,
            ..Self::all_active()
        }
    }

    /// Check if all accelerometer axes are powered
    #[must_use]
    pub const fn is_accel_active(&self) -> bool {
        !self.accel_x && !self.accel_y && !self.accel_z
    }

    /// Check if all gyroscope axes are powered
    #[must_use]
    pub const fn is_gyro_active(&self) -> bool {
        !self.gyro_x && !self.gyro_y && !self.gyro_z
    }
}

/// Power management status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerStatus {
    /// Current power mode
    pub mode: PowerMode,
    /// Selected clock source (`None` for the reserved encoding)
    pub clock_source: Option<ClockSource>,
    /// Temperature sensor disabled
    pub temp_disabled: bool,
    /// Wake-up rate used in cycle mode
    pub wake_frequency: WakeFrequency,
    /// Axes currently in standby
    pub standby: SensorStandby,
}

impl<I, D> Mpu6050Driver<I, D>
where
    I: RegisterInterface<AddressType = u8>,
    D: DelayNs,
{
    /// Set sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sleep(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_sleep(enable);
        })?;
        Ok(())
    }

    /// Select the clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_clksel(source as u8);
        })?;
        Ok(())
    }

    /// Enable or disable the temperature sensor
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_temperature_sensor(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_temp_dis(!enable);
        })?;
        Ok(())
    }

    /// Put individual axes in standby
    ///
    /// The cycle-mode wake frequency is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_standby(&mut self, standby: &SensorStandby) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_2().modify(|w| {
            w.set_stby_xa(standby.accel_x);
            w.set_stby_ya(standby.accel_y);
            w.set_stby_za(standby.accel_z);
            w.set_stby_xg(standby.gyro_x);
            w.set_stby_yg(standby.gyro_y);
            w.set_stby_zg(standby.gyro_z);
        })?;
        Ok(())
    }

    /// Enter accelerometer-only cycle mode
    ///
    /// Gyroscope axes go to standby and the temperature sensor is disabled.
    /// The device then wakes at `frequency` to take one accelerometer sample.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enter_cycle_mode(&mut self, frequency: WakeFrequency) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_2().write(|w| {
            w.set_lp_wake_ctrl(frequency as u8);
            w.set_stby_xg(true);
            w.set_stby_yg(true);
            w.set_stby_zg(true);
        })?;

        self.device.pwr_mgmt_1().modify(|w| {
            w.set_cycle(true);
            w.set_sleep(false);
            w.set_temp_dis(true);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Entered cycle mode at {} Hz", frequency.rate_hz());

        Ok(())
    }

    /// Leave cycle mode and power every axis again
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn exit_cycle_mode(&mut self) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().modify(|w| {
            w.set_cycle(false);
            w.set_temp_dis(false);
        })?;

        self.device.pwr_mgmt_2().write(|_| {})?;

        Ok(())
    }

    /// Reset every register to its power-on value
    ///
    /// The device comes back asleep; call [`init`](Self::init) again before
    /// acquiring samples.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.device.pwr_mgmt_1().write(|w| {
            w.set_device_reset(true);
        })?;
        self.delay.delay_ms(self.config.settle_delay_ms);
        Ok(())
    }

    /// Read the current power management state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_power_status(&mut self) -> Result<PowerStatus, Error<I::Error>> {
        let pwr_mgmt_1 = self.device.pwr_mgmt_1().read()?;
        let pwr_mgmt_2 = self.device.pwr_mgmt_2().read()?;

        let mode = if pwr_mgmt_1.sleep() {
            PowerMode::Sleep
        } else if pwr_mgmt_1.cycle() {
            PowerMode::Cycle
        } else {
            PowerMode::Normal
        };

        Ok(PowerStatus {
            mode,
            clock_source: ClockSource::from_bits(pwr_mgmt_1.clksel()),
            temp_disabled: pwr_mgmt_1.temp_dis(),
            wake_frequency: WakeFrequency::from_bits(pwr_mgmt_2.lp_wake_ctrl()),
            standby: SensorStandby {
                accel_x: pwr_mgmt_2.stby_xa(),
                accel_y: pwr_mgmt_2.stby_ya(),
                accel_z: pwr_mgmt_2.stby_za(),
                gyro_x: pwr_mgmt_2.stby_xg(),
                gyro_y: pwr_mgmt_2.stby_yg(),
                gyro_z: pwr_mgmt_2.stby_zg(),
            },
        })
    }
}
