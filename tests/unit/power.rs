//! Unit tests for power management

use crate::common::{Operation, create_initialized_driver};
use mpu6050::{ClockSource, PowerMode, SensorStandby, WakeFrequency};

#[test]
fn test_power_status_after_init() {
    let (mut driver, _interface) = create_initialized_driver();

    let status = driver.read_power_status().unwrap();
    assert_eq!(status.mode, PowerMode::Normal);
    assert_eq!(status.clock_source, Some(ClockSource::Internal));
    assert!(!status.temp_disabled);
    assert_eq!(status.standby, SensorStandby::all_active());
}

#[test]
fn test_enter_cycle_mode() {
    let (mut driver, interface) = create_initialized_driver();

    driver.enter_cycle_mode(WakeFrequency::Hz20).unwrap();

    // LP_WAKE_CTRL = 2 with the gyroscope in standby
    assert!(interface.verify_register(0x6C, 0x87));
    // CYCLE and TEMP_DIS set, SLEEP clear
    assert!(interface.verify_register(0x6B, 0x28));

    // PWR_MGMT_2 is configured before cycling starts
    let writes = interface.writes();
    assert_eq!(writes, vec![(0x6C, 0x87), (0x6B, 0x28)]);

    let status = driver.read_power_status().unwrap();
    assert_eq!(status.mode, PowerMode::Cycle);
    assert_eq!(status.wake_frequency, WakeFrequency::Hz20);
    assert!(status.temp_disabled);
    assert!(status.standby.is_accel_active());
    assert!(!status.standby.is_gyro_active());
}

#[test]
fn test_exit_cycle_mode() {
    let (mut driver, interface) = create_initialized_driver();

    driver.enter_cycle_mode(WakeFrequency::Hz40).unwrap();
    driver.exit_cycle_mode().unwrap();

    assert!(interface.verify_register(0x6B, 0x00));
    assert!(interface.verify_register(0x6C, 0x00));

    let status = driver.read_power_status().unwrap();
    assert_eq!(status.mode, PowerMode::Normal);
    assert_eq!(status.standby, SensorStandby::all_active());
}

#[test]
fn test_sleep() {
    let (mut driver, interface) = create_initialized_driver();

    driver.set_sleep(true).unwrap();
    assert!(interface.verify_register(0x6B, 0x40));
    assert_eq!(
        driver.read_power_status().unwrap().mode,
        PowerMode::Sleep
    );

    driver.set_sleep(false).unwrap();
    assert!(interface.verify_register(0x6B, 0x00));
}

#[test]
fn test_clock_source() {
    let (mut driver, interface) = create_initialized_driver();

    driver.set_clock_source(ClockSource::PllGyroX).unwrap();
    assert!(interface.verify_register(0x6B, 0x01));

    // Sleep bit is preserved
    driver.set_sleep(true).unwrap();
    driver.set_clock_source(ClockSource::PllGyroZ).unwrap();
    assert!(interface.verify_register(0x6B, 0x43));

    // Reserved clock selection
    interface.set_register(0x6B, 0x06);
    assert_eq!(driver.read_power_status().unwrap().clock_source, None);
}

#[test]
fn test_temperature_sensor_toggle() {
    let (mut driver, interface) = create_initialized_driver();

    driver.set_temperature_sensor(false).unwrap();
    assert!(interface.verify_register(0x6B, 0x08));

    driver.set_temperature_sensor(true).unwrap();
    assert!(interface.verify_register(0x6B, 0x00));
}

#[test]
fn test_standby_preserves_wake_frequency() {
    let (mut driver, interface) = create_initialized_driver();
    interface.set_register(0x6C, 0x40);

    driver
        .configure_standby(&SensorStandby::accel_standby())
        .unwrap();
    assert!(interface.verify_register(0x6C, 0x78));

    let status = driver.read_power_status().unwrap();
    assert_eq!(status.wake_frequency, WakeFrequency::Hz5);
    assert!(!status.standby.is_accel_active());
    assert!(status.standby.is_gyro_active());
}

#[test]
fn test_reset() {
    let (mut driver, interface) = create_initialized_driver();

    driver.reset().unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::WriteRegister {
                address: 0x6B,
                value: 0x80
            },
            Operation::Delay { ms: 100 },
        ]
    );

    // Device comes back asleep
    assert_eq!(
        driver.read_power_status().unwrap().mode,
        PowerMode::Sleep
    );
}
