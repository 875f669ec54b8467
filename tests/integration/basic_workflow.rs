//! Integration tests for basic workflow scenarios

use crate::common::{create_mock_driver, Operation};
use mpu6050::{
    AccelFullScale, AccelHpf, DlpfMode, GyroFullScale, InterruptConfig, InterruptPinConfig,
    MotionDetectionConfig, PowerMode, WakeFrequency,
};

#[test]
fn test_complete_initialization_workflow() {
    let (mut driver, interface) = create_mock_driver();

    // Initialize with a data-ready interrupt
    driver.init(&[(0x38, 0x01)]).unwrap();

    // Narrow the ranges for a slow-moving application
    driver.set_accel_full_scale(AccelFullScale::G2).unwrap();
    driver.set_gyro_full_scale(GyroFullScale::Dps250).unwrap();
    driver.set_dlpf_mode(DlpfMode::Hz44).unwrap();
    driver.set_sample_rate_divider(9).unwrap();
    assert_eq!(driver.sample_rate_hz().unwrap(), 100.0);

    // Device lying flat and slowly turning around Z
    interface.set_accel_data(100, -50, 16384);
    interface.set_gyro_data(0, 0, 262);
    interface.set_temperature_data(-1700);

    let sample = driver.acquire_sample().unwrap();
    assert!(sample.accel.x > 0.0 && sample.accel.y < 0.0);
    assert_eq!(sample.accel.z, 1.0);
    assert_eq!(sample.gyro.z, 2.0);
    assert_eq!(sample.temperature, 30.0);
    assert!((sample.accel.magnitude() - 1.0).abs() < 0.01);
}

#[test]
fn test_self_test_then_acquire() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&[]).unwrap();

    interface.set_accel_data(0, 0, 2048);
    interface.set_accel_self_test_response([2048, 2048, 2048]);
    interface.set_gyro_self_test_response([6550, 6550, 6550]);

    assert!(driver.run_self_test().unwrap());

    // Back at ±16 g after the self-test
    let sample = driver.acquire_sample().unwrap();
    assert_eq!(sample.accel.z, 1.0);
    assert_eq!(driver.accel_full_scale().unwrap(), AccelFullScale::G16);
}

#[test]
fn test_calibrate_then_acquire() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&[]).unwrap();

    // Sensor reads 0.9 g at rest
    interface.set_accel_data(0, 0, 1843);
    let calibration = driver.calibrate_accelerometer(20).unwrap();
    assert!(calibration.scale_z > 1.1);

    let sample = driver.acquire_calibrated_sample().unwrap();
    assert!((sample.accel.z - 1.0).abs() < 1e-3);
}

#[test]
fn test_motion_wake_workflow() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&[]).unwrap();
    interface.clear_operations();

    driver
        .configure_interrupt_pin(&InterruptPinConfig::open_drain_active_low())
        .unwrap();
    driver.set_accel_hpf(AccelHpf::Hz5).unwrap();
    driver
        .configure_motion_detection(&MotionDetectionConfig::motion(100, 5))
        .unwrap();
    driver
        .configure_interrupts(&InterruptConfig::motion_only())
        .unwrap();
    driver.enter_cycle_mode(WakeFrequency::Hz5).unwrap();

    assert!(interface.verify_register(0x1C, 0x19));
    assert!(interface.verify_register(0x1F, 50));
    assert!(interface.verify_register(0x38, 0x40));
    assert_eq!(
        driver.read_power_status().unwrap().mode,
        PowerMode::Cycle
    );

    // Motion occurs on +Z
    interface.set_register(0x3A, 0x40);
    interface.set_register(0x61, 0x04);

    let status = driver.read_interrupt_status().unwrap();
    assert!(status.motion);
    let motion = driver.read_motion_status().unwrap();
    assert!(motion.z_positive);

    driver.exit_cycle_mode().unwrap();
    assert_eq!(
        driver.read_power_status().unwrap().mode,
        PowerMode::Normal
    );
}

#[test]
fn test_error_recovery() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&[]).unwrap();

    interface.fail_next_read();
    assert!(driver.acquire_sample().is_err());

    // Subsequent operations work (error was only for one operation)
    interface.set_accel_data(2048, 0, 0);
    let sample = driver.acquire_sample().unwrap();
    assert_eq!(sample.accel.x, 1.0);
}

#[test]
fn test_reinitialize_after_reset() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&[]).unwrap();
    driver.set_accel_full_scale(AccelFullScale::G4).unwrap();

    driver.reset().unwrap();
    interface.clear_operations();
    driver.init(&[]).unwrap();

    assert!(interface.verify_register(0x1C, 0x18));
    assert!(
        interface
            .operations()
            .contains(&Operation::Delay { ms: 100 })
    );
}

#[test]
fn test_release() {
    let (mut driver, interface) = create_mock_driver();
    driver.init(&[]).unwrap();

    let (released, _delay) = driver.release();
    released.set_register(0x19, 3);
    assert!(interface.verify_register(0x19, 3));
}
