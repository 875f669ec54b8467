//! Unit tests for error handling and recovery

use crate::common::{MockError, create_initialized_driver, create_mock_driver};
use mpu6050::{Axis, Error, SelfTestFailure, SelfTestSensor};

#[test]
fn test_read_failure_basic() {
    let (mut driver, interface) = create_initialized_driver();

    // Inject a read failure
    interface.fail_next_read();

    let result = driver.acquire_sample();
    assert!(
        matches!(result, Err(Error::Bus(MockError::Communication))),
        "Acquisition should fail when a read fails"
    );
}

#[test]
fn test_read_failure_mid_sample() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_accel_data(2048, 0, 0);

    // Fails on GYRO_XOUT_H
    interface.fail_read_after(8);
    assert!(driver.acquire_sample().is_err());

    // The scale reads never happened
    assert_eq!(interface.reads().len(), 8);
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_initialized_driver();

    interface.fail_next_read();
    assert!(driver.acquire_sample().is_err());

    // Only one operation was affected
    interface.set_accel_data(2048, 0, 0);
    let sample = driver.acquire_sample().unwrap();
    assert_eq!(sample.accel.x, 1.0);
}

#[test]
fn test_write_failure() {
    let (mut driver, interface) = create_initialized_driver();

    interface.fail_next_write();
    let result = driver.write_command(0x19, 4);
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
    assert!(interface.verify_register(0x19, 0));

    // Next write goes through
    driver.write_command(0x19, 4).unwrap();
    assert!(interface.verify_register(0x19, 4));
}

#[test]
fn test_init_aborts_on_write_failure() {
    let (mut driver, interface) = create_mock_driver();

    // Reset and wake succeed, SMPLRT_DIV fails
    interface.fail_write_after(2);

    assert!(driver.init(&[(0x38, 0x01)]).is_err());
    assert_eq!(interface.writes(), vec![(0x6B, 0x80), (0x6B, 0x00)]);
}

#[test]
fn test_init_aborts_on_identity_read_failure() {
    let (mut driver, interface) = create_mock_driver();
    interface.fail_next_read();

    assert!(matches!(
        driver.init(&[]),
        Err(Error::Bus(MockError::Communication))
    ));
    assert_eq!(interface.writes().len(), 2);
}

#[test]
fn test_init_retry_after_mismatch() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_who_am_i(0x72);
    assert!(driver.init(&[]).is_err());

    interface.set_who_am_i(0x68);
    assert!(driver.init(&[]).is_ok());
}

#[test]
fn test_error_display() {
    let error: Error<MockError> = Error::IdentityMismatch {
        expected: 0x68,
        found: 0x70,
    };
    assert_eq!(
        error.to_string(),
        "device identity mismatch: expected 0x68, found 0x70"
    );

    let error: Error<MockError> = Error::Bus(MockError::Communication);
    assert_eq!(error.to_string(), "bus error: Communication");

    let error: Error<MockError> = Error::SelfTestFailed(SelfTestFailure {
        sensor: SelfTestSensor::Gyroscope,
        axis: Axis::Z,
        response: 120.0,
    });
    let message = error.to_string();
    assert!(message.contains("Gyroscope"));
    assert!(message.contains("Z axis"));

    let error: Error<MockError> = Error::DeviceMoving;
    assert_eq!(error.to_string(), "device moved during calibration");
}

#[test]
fn test_bus_error_conversion() {
    let error: Error<MockError> = MockError::Communication.into();
    assert!(matches!(error, Error::Bus(MockError::Communication)));
}
