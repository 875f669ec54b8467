//! Register definitions for the MPU-6050
//!
//! The MPU-6050 has a single flat register file. Configuration and
//! status registers are declared with `device-driver` so the driver can use
//! typed field accessors. The sensor output block (0x3B-0x48) is read one
//! register at a time through [`address`] constants, since every value is
//! split across a high and a low byte register.

device_driver::create_device!(
    device_name: Mpu6050,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// SMPLRT_DIV - Sample Rate Divider (0x19)
        /// Sample rate = gyroscope output rate / (1 + SMPLRT_DIV)
        register SmplrtDiv {
            const ADDRESS = 0x19;
            const SIZE_BITS = 8;

            /// Divider applied to the gyroscope output rate
            smplrt_div: uint = 0..8,
        },

        /// CONFIG - Frame sync and digital low pass filter (0x1A)
        register Configuration {
            const ADDRESS = 0x1A;
            const SIZE_BITS = 8;

            /// Digital low pass filter setting (0 = 260 Hz ... 6 = 5 Hz)
            dlpf_cfg: uint = 0..3,
            /// External frame synchronization input
            ext_sync_set: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG - Gyroscope self-test and full scale (0x1B)
        register GyroConfig {
            const ADDRESS = 0x1B;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Full scale select (0 = ±250°/s ... 3 = ±2000°/s)
            fs_sel: uint = 3..5,
            /// Z-axis self-test enable
            zg_st: bool = 5,
            /// Y-axis self-test enable
            yg_st: bool = 6,
            /// X-axis self-test enable
            xg_st: bool = 7,
        },

        /// ACCEL_CONFIG - Accelerometer self-test, full scale and high pass filter (0x1C)
        register AccelConfig {
            const ADDRESS = 0x1C;
            const SIZE_BITS = 8;

            /// Digital high pass filter used by the motion detectors
            accel_hpf: uint = 0..3,
            /// Full scale select (0 = ±2g ... 3 = ±16g)
            afs_sel: uint = 3..5,
            /// Z-axis self-test enable
            za_st: bool = 5,
            /// Y-axis self-test enable
            ya_st: bool = 6,
            /// X-axis self-test enable
            xa_st: bool = 7,
        },

        /// FF_THR - Free-fall detection threshold (0x1D), 2 mg/LSB
        register FfThr {
            const ADDRESS = 0x1D;
            const SIZE_BITS = 8;

            ff_thr: uint = 0..8,
        },

        /// FF_DUR - Free-fall detection duration (0x1E), 1 ms/LSB
        register FfDur {
            const ADDRESS = 0x1E;
            const SIZE_BITS = 8;

            ff_dur: uint = 0..8,
        },

        /// MOT_THR - Motion detection threshold (0x1F), 2 mg/LSB
        register MotThr {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            mot_thr: uint = 0..8,
        },

        /// MOT_DUR - Motion detection duration (0x20), 1 ms/LSB
        register MotDur {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            mot_dur: uint = 0..8,
        },

        /// ZRMOT_THR - Zero-motion detection threshold (0x21)
        register ZrmotThr {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            zrmot_thr: uint = 0..8,
        },

        /// ZRMOT_DUR - Zero-motion detection duration (0x22), 64 ms/LSB
        register ZrmotDur {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            zrmot_dur: uint = 0..8,
        },

        /// INT_PIN_CFG - Interrupt pin / bypass configuration (0x37)
        register IntPinCfg {
            const ADDRESS = 0x37;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Auxiliary I2C bus bypass enable
            bypass_en: bool = 1,
            /// FSYNC pin used as interrupt input
            fsync_int_en: bool = 2,
            /// FSYNC interrupt active low
            fsync_int_level: bool = 3,
            /// Clear interrupt status on any read
            int_rd_clear: bool = 4,
            /// Latch the INT pin until status is cleared
            latch_int_en: bool = 5,
            /// INT pin open drain
            int_open: bool = 6,
            /// INT pin active low
            int_level: bool = 7,
        },

        /// INT_ENABLE - Interrupt enable (0x38)
        register IntEnable {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;

            /// Data ready interrupt enable
            data_rdy_en: bool = 0,
            reserved_2_1: uint = 1..3,
            /// Auxiliary I2C master interrupt enable
            mst_int_en: bool = 3,
            /// FIFO overflow interrupt enable
            fifo_oflow_en: bool = 4,
            /// Zero-motion interrupt enable
            zmot_en: bool = 5,
            /// Motion interrupt enable
            mot_en: bool = 6,
            /// Free-fall interrupt enable
            ff_en: bool = 7,
        },

        /// INT_STATUS - Interrupt status (0x3A), cleared on read
        register IntStatus {
            const ADDRESS = 0x3A;
            const SIZE_BITS = 8;

            /// Data ready
            data_rdy_int: bool = 0,
            reserved_2_1: uint = 1..3,
            /// Auxiliary I2C master interrupt
            mst_int: bool = 3,
            /// FIFO overflow
            fifo_oflow_int: bool = 4,
            /// Zero motion detected
            zmot_int: bool = 5,
            /// Motion detected
            mot_int: bool = 6,
            /// Free fall detected
            ff_int: bool = 7,
        },

        /// MOT_DETECT_STATUS - Motion detection status (0x61)
        register MotDetectStatus {
            const ADDRESS = 0x61;
            const SIZE_BITS = 8;

            /// Zero motion state
            mot_zrmot: bool = 0,
            reserved_1: uint = 1..2,
            /// Motion on positive Z
            mot_zpos: bool = 2,
            /// Motion on negative Z
            mot_zneg: bool = 3,
            /// Motion on positive Y
            mot_ypos: bool = 4,
            /// Motion on negative Y
            mot_yneg: bool = 5,
            /// Motion on positive X
            mot_xpos: bool = 6,
            /// Motion on negative X
            mot_xneg: bool = 7,
        },

        /// MOT_DETECT_CTRL - Motion detection control (0x69)
        register MotDetectCtrl {
            const ADDRESS = 0x69;
            const SIZE_BITS = 8;

            /// Motion detection counter decrement rate
            mot_count: uint = 0..2,
            /// Free-fall detection counter decrement rate
            ff_count: uint = 2..4,
            /// Extra accelerometer power-on delay in ms
            accel_on_delay: uint = 4..6,
            reserved_7_6: uint = 6..8,
        },

        /// PWR_MGMT_1 - Power Management 1 (0x6B)
        register PwrMgmt1 {
            const ADDRESS = 0x6B;
            const SIZE_BITS = 8;

            /// Clock source select
            clksel: uint = 0..3,
            /// Temperature sensor disable
            temp_dis: bool = 3,
            reserved_4: uint = 4..5,
            /// Cycle between sleep and single accelerometer samples
            cycle: bool = 5,
            /// Sleep mode enable
            sleep: bool = 6,
            /// Device reset (self-clearing)
            device_reset: bool = 7,
        },

        /// PWR_MGMT_2 - Power Management 2 (0x6C)
        register PwrMgmt2 {
            const ADDRESS = 0x6C;
            const SIZE_BITS = 8;

            /// Gyroscope Z-axis standby
            stby_zg: bool = 0,
            /// Gyroscope Y-axis standby
            stby_yg: bool = 1,
            /// Gyroscope X-axis standby
            stby_xg: bool = 2,
            /// Accelerometer Z-axis standby
            stby_za: bool = 3,
            /// Accelerometer Y-axis standby
            stby_ya: bool = 4,
            /// Accelerometer X-axis standby
            stby_xa: bool = 5,
            /// Wake-up frequency in accelerometer-only low power mode
            lp_wake_ctrl: uint = 6..8,
        },

        /// WHO_AM_I - Device identity (0x75)
        /// Reads 0x68 on a genuine part
        register WhoAmI {
            const ADDRESS = 0x75;
            const SIZE_BITS = 8;

            who_am_i: uint = 0..8,
        }
    }
);

/// Raw register addresses used for single-register access
pub mod address {
    /// SMPLRT_DIV
    pub const SMPLRT_DIV: u8 = 0x19;
    /// CONFIG
    pub const CONFIG: u8 = 0x1A;
    /// GYRO_CONFIG
    pub const GYRO_CONFIG: u8 = 0x1B;
    /// ACCEL_CONFIG
    pub const ACCEL_CONFIG: u8 = 0x1C;
    /// INT_PIN_CFG
    pub const INT_PIN_CFG: u8 = 0x37;
    /// INT_ENABLE
    pub const INT_ENABLE: u8 = 0x38;
    /// INT_STATUS
    pub const INT_STATUS: u8 = 0x3A;
    /// First output register (ACCEL_XOUT_H)
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    /// TEMP_OUT_H
    pub const TEMP_OUT_H: u8 = 0x41;
    /// GYRO_XOUT_H
    pub const GYRO_XOUT_H: u8 = 0x43;
    /// Last output register (GYRO_ZOUT_L)
    pub const GYRO_ZOUT_L: u8 = 0x48;
    /// MOT_DETECT_STATUS
    pub const MOT_DETECT_STATUS: u8 = 0x61;
    /// MOT_DETECT_CTRL
    pub const MOT_DETECT_CTRL: u8 = 0x69;
    /// PWR_MGMT_1
    pub const PWR_MGMT_1: u8 = 0x6B;
    /// PWR_MGMT_2
    pub const PWR_MGMT_2: u8 = 0x6C;
    /// WHO_AM_I
    pub const WHO_AM_I: u8 = 0x75;
}

/// Number of output registers read per acquisition (accel, temperature, gyro)
pub const OUTPUT_REGISTER_COUNT: usize = 14;

/// Self-test enable bits shared by `ACCEL_CONFIG` and `GYRO_CONFIG` (X, Y, Z)
pub const SELF_TEST_ENABLE_MASK: u8 = 0xE0;

/// `PWR_MGMT_1` value that triggers a device reset
pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0x80;
