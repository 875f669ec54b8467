//! Unit tests for interrupt and motion detection configuration

use crate::common::create_initialized_driver;
use mpu6050::{
    AccelFullScale, AccelHpf, CounterDecrement, InterruptConfig, InterruptPinConfig,
    MotionDetectionConfig, MotionDetectionControl,
};

#[test]
fn test_configure_interrupt_pin() {
    let (mut driver, interface) = create_initialized_driver();

    driver
        .configure_interrupt_pin(&InterruptPinConfig::open_drain_active_low())
        .unwrap();

    assert_eq!(interface.writes(), vec![(0x37, 0xE0)]);
}

#[test]
fn test_configure_interrupt_pin_bypass() {
    let (mut driver, interface) = create_initialized_driver();

    let config = InterruptPinConfig {
        i2c_bypass: true,
        clear_on_any_read: true,
        ..Default::default()
    };
    driver.configure_interrupt_pin(&config).unwrap();

    assert!(interface.verify_register(0x37, 0x12));
}

#[test]
fn test_configure_interrupts() {
    let (mut driver, interface) = create_initialized_driver();

    let config = InterruptConfig {
        free_fall: true,
        motion: true,
        zero_motion: true,
        data_ready: true,
    };
    driver.configure_interrupts(&config).unwrap();
    assert!(interface.verify_register(0x38, 0xE1));

    driver
        .configure_interrupts(&InterruptConfig::data_ready_only())
        .unwrap();
    assert!(interface.verify_register(0x38, 0x01));

    driver
        .configure_interrupts(&InterruptConfig::default())
        .unwrap();
    assert!(interface.verify_register(0x38, 0x00));
}

#[test]
fn test_read_interrupt_status_clears_flags() {
    let (mut driver, interface) = create_initialized_driver();

    // Motion and data ready pending
    interface.set_register(0x3A, 0x41);

    let status = driver.read_interrupt_status().unwrap();
    assert!(status.motion);
    assert!(status.data_ready);
    assert!(!status.free_fall);
    assert!(!status.zero_motion);
    assert!(status.any_set());

    let status = driver.read_interrupt_status().unwrap();
    assert!(!status.any_set(), "Reading INT_STATUS should clear it");
}

#[test]
fn test_configure_motion_detection() {
    let (mut driver, interface) = create_initialized_driver();

    let config = MotionDetectionConfig {
        free_fall_threshold_mg: 300,
        free_fall_duration_ms: 30,
        motion_threshold_mg: 40,
        motion_duration_ms: 20,
        zero_motion_threshold: 8,
        zero_motion_duration: 4,
        control: MotionDetectionControl::default(),
    };
    driver.configure_motion_detection(&config).unwrap();

    assert_eq!(
        interface.writes(),
        vec![
            (0x1D, 150),
            (0x1E, 30),
            (0x1F, 20),
            (0x20, 20),
            (0x21, 8),
            (0x22, 4),
            (0x69, 0x00),
        ]
    );
}

#[test]
fn test_motion_detection_control() {
    let (mut driver, interface) = create_initialized_driver();

    let config = MotionDetectionConfig {
        control: MotionDetectionControl {
            accel_on_delay_ms: 3,
            free_fall_decrement: CounterDecrement::By2,
            motion_decrement: CounterDecrement::By1,
        },
        ..MotionDetectionConfig::motion(40, 1)
    };
    driver.configure_motion_detection(&config).unwrap();

    // ACCEL_ON_DELAY = 3, FF_COUNT = 2, MOT_COUNT = 1
    assert!(interface.verify_register(0x69, 0x39));
    assert_eq!(interface.writes().last(), Some(&(0x69, 0x39)));
}

#[test]
fn test_motion_detection_control_clamps_delay() {
    let (mut driver, interface) = create_initialized_driver();

    let config = MotionDetectionConfig {
        control: MotionDetectionControl {
            accel_on_delay_ms: 12,
            free_fall_decrement: CounterDecrement::Reset,
            motion_decrement: CounterDecrement::By4,
        },
        ..Default::default()
    };
    driver.configure_motion_detection(&config).unwrap();

    assert!(interface.verify_register(0x69, 0x33));
}

#[test]
fn test_set_accel_hpf() {
    let (mut driver, interface) = create_initialized_driver();

    // ±16 g from init is kept
    driver.set_accel_hpf(AccelHpf::Hz5).unwrap();
    assert!(interface.verify_register(0x1C, 0x19));
    assert_eq!(interface.reads(), vec![0x1C]);
    assert_eq!(interface.writes(), vec![(0x1C, 0x19)]);
    assert_eq!(driver.accel_full_scale().unwrap(), AccelFullScale::G16);
    assert_eq!(driver.accel_hpf().unwrap(), Some(AccelHpf::Hz5));

    driver.set_accel_hpf(AccelHpf::Hold).unwrap();
    assert!(interface.verify_register(0x1C, 0x1F));

    driver.set_accel_hpf(AccelHpf::Reset).unwrap();
    assert!(interface.verify_register(0x1C, 0x18));
}

#[test]
fn test_set_accel_hpf_preserves_self_test_bits() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(0x1C, 0xE8);

    driver.set_accel_hpf(AccelHpf::Hz0_63).unwrap();
    assert!(interface.verify_register(0x1C, 0xEC));
}

#[test]
fn test_full_scale_preserves_hpf() {
    let (mut driver, interface) = create_initialized_driver();
    driver.set_accel_hpf(AccelHpf::Hz1_25).unwrap();

    driver.set_accel_full_scale(AccelFullScale::G2).unwrap();
    assert!(interface.verify_register(0x1C, 0x03));
}

#[test]
fn test_accel_hpf_reserved_value() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(0x1C, 0x1D);

    assert_eq!(driver.accel_hpf().unwrap(), None);
}

#[test]
fn test_motion_threshold_saturates() {
    let (mut driver, interface) = create_initialized_driver();

    driver
        .configure_motion_detection(&MotionDetectionConfig::motion(2000, 1))
        .unwrap();

    assert!(interface.verify_register(0x1F, 255));
    assert!(interface.verify_register(0x1D, 0));
}

#[test]
fn test_read_motion_status() {
    let (mut driver, interface) = create_initialized_driver();

    // Positive X motion, zero-motion flag set
    interface.set_register(0x61, 0x41);

    let status = driver.read_motion_status().unwrap();
    assert!(status.x_positive);
    assert!(status.zero_motion);
    assert!(!status.x_negative);
    assert!(!status.z_positive);
    assert!(status.any_motion());

    interface.set_register(0x61, 0x01);
    let status = driver.read_motion_status().unwrap();
    assert!(!status.any_motion());
    assert!(status.zero_motion);
}
