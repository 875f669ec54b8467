//! Interrupt configuration and motion detection
//!
//! The MPU-6050 has a single interrupt pin (INT) that can be configured to
//! trigger on:
//! - Data ready
//! - Free fall
//! - Motion above a threshold
//! - Zero motion
//!
//! The three motion detectors compare against the high pass filtered
//! accelerometer signal, so select a filter with
//! [`Mpu6050Driver::set_accel_hpf`] before relying on them.
//!
//! # Example
//!
//! ```ignore
//! # use mpu6050::{Mpu6050Driver, interrupt::{AccelHpf, InterruptConfig, InterruptPinConfig, MotionDetectionConfig}};
//! # let mut imu: Mpu6050Driver<_, _> = todo!();
//! // Active-low, open-drain, latched
//! imu.configure_interrupt_pin(&InterruptPinConfig::open_drain_active_low())?;
//!
//! // Interrupt when any axis exceeds 40 mg for 20 ms
//! imu.set_accel_hpf(AccelHpf::Hz5)?;
//! imu.configure_motion_detection(&MotionDetectionConfig::motion(40, 20))?;
//! imu.configure_interrupts(&InterruptConfig::motion_only())?;
//! # Ok::<(), mpu6050::Error<()>>(())
//! ```

use crate::{Error, Mpu6050Driver};

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

/// Resolution of the free-fall and motion thresholds in mg per LSB
pub const MOTION_THRESHOLD_MG_PER_LSB: u16 = 2;

/// Interrupt pin electrical configuration (`INT_PIN_CFG`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptPinConfig {
    /// Active low (true) or active high (false)
    pub active_low: bool,
    /// Open-drain (true) or push-pull (false)
    pub open_drain: bool,
    /// Latch interrupt until cleared
    pub latch_enabled: bool,
    /// Clear interrupt status on any register read (true) or only on status read (false)
    pub clear_on_any_read: bool,
    /// Connect the auxiliary I2C bus directly to the host bus
    pub i2c_bypass: bool,
}

impl InterruptPinConfig {
    /// Active-low, open-drain, latched interrupt (shared INT lines)
    #[must_use]
    pub const fn open_drain_active_low() -> Self {
        Self {
            active_low: true,
            open_drain: true,
            latch_enabled: true,
            clear_on_any_read: false,
            i2c_bypass: false,
        }
    }
}

/// Interrupt source configuration (`INT_ENABLE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptConfig {
    /// Enable free-fall interrupt
    pub free_fall: bool,
    /// Enable motion interrupt
    pub motion: bool,
    /// Enable zero-motion interrupt
    pub zero_motion: bool,
    /// Enable data ready interrupt (fires when new sensor data is available)
    pub data_ready: bool,
}

impl InterruptConfig {
    /// Create configuration with only data ready interrupt enabled
    #[must_use]
    pub const fn data_ready_only() -> Self {
        Self {
            free_fall: false,
            motion: false,
            zero_motion: false,
            data_ready: true,
        }
    }

    /// Create configuration with only the motion interrupt enabled
    #[must_use]
    pub const fn motion_only() -> Self {
        Self {
            free_fall: false,
            motion: true,
            zero_motion: false,
            data_ready: false,
        }
    }

    /// Check if any interrupt is enabled
    #[must_use]
    pub const fn any_enabled(&self) -> bool {
        self.free_fall || self.motion || self.zero_motion || self.data_ready
    }
}

/// Interrupt status flags (`INT_STATUS`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptStatus {
    /// Free-fall interrupt flag
    pub free_fall: bool,
    /// Motion interrupt flag
    pub motion: bool,
    /// Zero-motion interrupt flag
    pub zero_motion: bool,
    /// FIFO overflow interrupt flag
    pub fifo_overflow: bool,
    /// Auxiliary I2C master interrupt flag
    pub i2c_master: bool,
    /// Data ready interrupt flag
    pub data_ready: bool,
}

impl InterruptStatus {
    /// Check if any interrupt flag is set
    #[must_use]
    pub const fn any_set(&self) -> bool {
        self.free_fall
            || self.motion
            || self.zero_motion
            || self.fifo_overflow
            || self.i2c_master
            || self.data_ready
    }
}

/// Accelerometer digital high pass filter (`ACCEL_CONFIG` bits 0-2)
///
/// Only the free-fall, motion and zero-motion detectors see the filtered
/// signal; the output registers are unaffected. `Hold` latches the current
/// sample as the filter reference, so later detection compares against it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelHpf {
    /// Filter disabled (reset value)
    #[default]
    Reset = 0,
    /// 5 Hz cut-off
    Hz5 = 1,
    /// 2.5 Hz cut-off
    Hz2_5 = 2,
    /// 1.25 Hz cut-off
    Hz1_25 = 3,
    /// 0.63 Hz cut-off
    Hz0_63 = 4,
    /// Hold the current reference sample
    Hold = 7,
}

impl AccelHpf {
    /// Decode `ACCEL_HPF` bits, `None` for the reserved values 5 and 6
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(Self::Reset),
            1 => Some(Self::Hz5),
            2 => Some(Self::Hz2_5),
            3 => Some(Self::Hz1_25),
            4 => Some(Self::Hz0_63),
            7 => Some(Self::Hold),
            _ => None,
        }
    }

    /// Cut-off frequency in Hz, `None` when the filter is not running
    #[must_use]
    pub const fn cutoff_hz(self) -> Option<f32> {
        match self {
            Self::Hz5 => Some(5.0),
            Self::Hz2_5 => Some(2.5),
            Self::Hz1_25 => Some(1.25),
            Self::Hz0_63 => Some(0.63),
            Self::Reset | Self::Hold => None,
        }
    }
}

/// Step by which a detection counter decrements when the condition is not met
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterDecrement {
    /// Counter resets to zero
    #[default]
    Reset = 0,
    /// Decrement by 1
    By1 = 1,
    /// Decrement by 2
    By2 = 2,
    /// Decrement by 4
    By4 = 3,
}

/// Detector timing (`MOT_DETECT_CTRL`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionDetectionControl {
    /// Extra accelerometer power-on delay in ms, added to the fixed 4 ms
    ///
    /// Only 0 to 3 fit in the register; larger values are clamped.
    pub accel_on_delay_ms: u8,
    /// Free-fall counter decrement
    pub free_fall_decrement: CounterDecrement,
    /// Motion counter decrement
    pub motion_decrement: CounterDecrement,
}

impl MotionDetectionControl {
    /// Largest extra power-on delay the register can hold, in ms
    pub const MAX_ACCEL_ON_DELAY_MS: u8 = 3;

    /// Power-on delay as stored in `ACCEL_ON_DELAY`
    #[must_use]
    pub const fn accel_on_delay_bits(&self) -> u8 {
        if self.accel_on_delay_ms > Self::MAX_ACCEL_ON_DELAY_MS {
            Self::MAX_ACCEL_ON_DELAY_MS
        } else {
            self.accel_on_delay_ms
        }
    }
}

/// Free-fall, motion and zero-motion detector settings
///
/// Free-fall and motion thresholds are given in mg and stored at 2 mg/LSB,
/// saturating at 510 mg. Durations are in ms (1 ms/LSB), except the
/// zero-motion duration which counts 64 ms steps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionDetectionConfig {
    /// Free-fall threshold in mg
    pub free_fall_threshold_mg: u16,
    /// Free-fall duration in ms
    pub free_fall_duration_ms: u8,
    /// Motion threshold in mg
    pub motion_threshold_mg: u16,
    /// Motion duration in ms
    pub motion_duration_ms: u8,
    /// Zero-motion threshold (raw register value)
    pub zero_motion_threshold: u8,
    /// Zero-motion duration in 64 ms steps
    pub zero_motion_duration: u8,
    /// Power-on delay and counter decrement rates
    pub control: MotionDetectionControl,
}

impl MotionDetectionConfig {
    /// Motion detection only
    #[must_use]
    pub const fn motion(threshold_mg: u16, duration_ms: u8) -> Self {
        Self {
            free_fall_threshold_mg: 0,
            free_fall_duration_ms: 0,
            motion_threshold_mg: threshold_mg,
            motion_duration_ms: duration_ms,
            zero_motion_threshold: 0,
            zero_motion_duration: 0,
            control: MotionDetectionControl {
                accel_on_delay_ms: 0,
                free_fall_decrement: CounterDecrement::Reset,
                motion_decrement: CounterDecrement::Reset,
            },
        }
    }

    /// Free-fall detection only
    #[must_use]
    pub const fn free_fall(threshold_mg: u16, duration_ms: u8) -> Self {
        Self {
            free_fall_threshold_mg: threshold_mg,
            free_fall_duration_ms: duration_ms,
            ..Self::motion(0, 0)
        }
    }

    /// Register value for a threshold given in mg
    #[must_use]
    pub const fn threshold_register_value(threshold_mg: u16) -> u8 {
        let lsb = threshold_mg / MOTION_THRESHOLD_MG_PER_LSB;
        if lsb > u8::MAX as u16 {
            u8::MAX
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let value = lsb as u8;
            value
        }
    }
}

/// Motion detection status (`MOT_DETECT_STATUS`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct MotionStatus {
    /// Motion towards negative X
    pub x_negative: bool,
    /// Motion towards positive X
    pub x_positive: bool,
    /// Motion towards negative Y
    pub y_negative: bool,
    /// Motion towards positive Y
    pub y_positive: bool,
    /// Motion towards negative Z
    pub z_negative: bool,
    /// Motion towards positive Z
    pub z_positive: bool,
    /// Zero-motion state
    pub zero_motion: bool,
}

impl MotionStatus {
    /// Check if motion was detected in any direction
    #[must_use]
    pub const fn any_motion(&self) -> bool {
        self.x_negative
            || self.x_positive
            || self.y_negative
            || self.y_positive
            || self.z_negative
            || self.z_positive
    }
}

impl<I, D> Mpu6050Driver<I, D>
where
    I: RegisterInterface<AddressType = u8>,
    D: DelayNs,
{
    /// Configure interrupt pin electrical properties
    ///
    /// # Arguments
    /// * `config` - Interrupt pin configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupt_pin(
        &mut self,
        config: &InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.int_pin_cfg().write(|w| {
            w.set_int_level(config.active_low);
            w.set_int_open(config.open_drain);
            w.set_latch_int_en(config.latch_enabled);
            w.set_int_rd_clear(config.clear_on_any_read);
            w.set_bypass_en(config.i2c_bypass);
        })?;

        Ok(())
    }

    /// Configure interrupt sources
    ///
    /// # Arguments
    /// * `config` - Interrupt configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupts(&mut self, config: &InterruptConfig) -> Result<(), Error<I::Error>> {
        self.device.int_enable().write(|w| {
            w.set_ff_en(config.free_fall);
            w.set_mot_en(config.motion);
            w.set_zmot_en(config.zero_motion);
            w.set_data_rdy_en(config.data_ready);
        })?;

        Ok(())
    }

    /// Read interrupt status
    ///
    /// Reading `INT_STATUS` clears the flags on the device.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let status = self.device.int_status().read()?;

        Ok(InterruptStatus {
            free_fall: status.ff_int(),
            motion: status.mot_int(),
            zero_motion: status.zmot_int(),
            fifo_overflow: status.fifo_oflow_int(),
            i2c_master: status.mst_int(),
            data_ready: status.data_rdy_int(),
        })
    }

    /// Program the free-fall, motion and zero-motion detectors
    ///
    /// Writes `FF_THR`, `FF_DUR`, `MOT_THR`, `MOT_DUR`, `ZRMOT_THR` and
    /// `ZRMOT_DUR` in address order, then `MOT_DETECT_CTRL`. The detectors
    /// only raise interrupts once enabled through
    /// [`configure_interrupts`](Self::configure_interrupts), and they work on
    /// the high pass filtered signal (see [`set_accel_hpf`](Self::set_accel_hpf)).
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_motion_detection(
        &mut self,
        config: &MotionDetectionConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.ff_thr().write(|w| {
            w.set_ff_thr(MotionDetectionConfig::threshold_register_value(
                config.free_fall_threshold_mg,
            ));
        })?;
        self.device.ff_dur().write(|w| {
            w.set_ff_dur(config.free_fall_duration_ms);
        })?;
        self.device.mot_thr().write(|w| {
            w.set_mot_thr(MotionDetectionConfig::threshold_register_value(
                config.motion_threshold_mg,
            ));
        })?;
        self.device.mot_dur().write(|w| {
            w.set_mot_dur(config.motion_duration_ms);
        })?;
        self.device.zrmot_thr().write(|w| {
            w.set_zrmot_thr(config.zero_motion_threshold);
        })?;
        self.device.zrmot_dur().write(|w| {
            w.set_zrmot_dur(config.zero_motion_duration);
        })?;
        self.device.mot_detect_ctrl().write(|w| {
            w.set_accel_on_delay(config.control.accel_on_delay_bits());
            w.set_ff_count(config.control.free_fall_decrement as u8);
            w.set_mot_count(config.control.motion_decrement as u8);
        })?;

        Ok(())
    }

    /// Select the accelerometer high pass filter used by the motion detectors
    ///
    /// Full-scale and self-test bits of `ACCEL_CONFIG` are left untouched.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn set_accel_hpf(&mut self, hpf: AccelHpf) -> Result<(), Error<I::Error>> {
        self.device.accel_config().modify(|w| {
            w.set_accel_hpf(hpf as u8);
        })?;
        Ok(())
    }

    /// Read the active accelerometer high pass filter setting
    ///
    /// Returns `None` for the reserved values 5 and 6.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn accel_hpf(&mut self) -> Result<Option<AccelHpf>, Error<I::Error>> {
        let reg = self.device.accel_config().read()?;
        Ok(AccelHpf::from_bits(reg.accel_hpf()))
    }

    /// Read which directions triggered the motion detector
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn read_motion_status(&mut self) -> Result<MotionStatus, Error<I::Error>> {
        let status = self.device.mot_detect_status().read()?;

        Ok(MotionStatus {
            x_negative: status.mot_xneg(),
            x_positive: status.mot_xpos(),
            y_negative: status.mot_yneg(),
            y_positive: status.mot_ypos(),
            z_negative: status.mot_zneg(),
            z_positive: status.mot_zpos(),
            zero_motion: status.mot_zrmot(),
        })
    }
}
