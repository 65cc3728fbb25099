//! Unit tests for transport failure propagation

use crate::common::create_mock_driver;
use sparkfun_blocks::{Error, GyroScale, ImuConfig};

#[test]
fn test_read_failure_propagates() {
    let (mut driver, gyro, _xm) = create_mock_driver();

    gyro.fail_next_read();
    let result = driver.read_gyro();
    assert!(matches!(result, Err(Error::Bus(_))));
}

#[test]
fn test_write_failure_propagates_from_masked_update() {
    let (mut driver, gyro, _xm) = create_mock_driver();

    // The modify path reads first, then writes; fail the write half
    gyro.fail_next_write();
    let result = driver.set_gyro_scale(GyroScale::Dps500);
    assert!(matches!(result, Err(Error::Bus(_))));
}

#[test]
fn test_begin_fails_on_first_unreachable_device() {
    let (mut driver, gyro, _xm) = create_mock_driver();

    gyro.fail_next_read();
    assert!(driver.begin(ImuConfig::default()).is_err());
}

#[test]
fn test_failures_are_not_retried() {
    let (mut driver, gyro, _xm) = create_mock_driver();

    gyro.clear_operations();
    gyro.fail_next_read();
    let _ = driver.read_gyro();

    // One failed transaction, no retry traffic
    assert!(gyro.operations().is_empty());

    // The next operation goes through untouched
    assert!(driver.read_gyro().is_ok());
}

#[test]
fn test_xm_failure_does_not_affect_gyro_path() {
    let (mut driver, _gyro, xm) = create_mock_driver();

    xm.fail_next_read();
    assert!(driver.read_accel().is_err());
    assert!(driver.read_gyro().is_ok());
}
