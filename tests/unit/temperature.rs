//! Unit tests for the 12-bit temperature decode

use crate::common::create_mock_driver;

#[test]
fn test_positive_temperature() {
    let (mut driver, _gyro, xm) = create_mock_driver();

    xm.set_temperature_data(0x001);
    assert_eq!(driver.read_temperature().unwrap(), 1);

    xm.set_temperature_data(0x7FF);
    assert_eq!(driver.read_temperature().unwrap(), 2047);
}

#[test]
fn test_negative_temperature_sign_extends_from_bit_11() {
    let (mut driver, _gyro, xm) = create_mock_driver();

    xm.set_temperature_data(0xFFF);
    assert_eq!(driver.read_temperature().unwrap(), -1);

    xm.set_temperature_data(0x800);
    assert_eq!(driver.read_temperature().unwrap(), -2048);
}

#[test]
fn test_undriven_upper_nibble_is_ignored() {
    let (mut driver, _gyro, xm) = create_mock_driver();

    // The chip only drives 12 bits; whatever floats in the top nibble of
    // the high register must not leak into the sample.
    xm.set_temperature_data(0xF123);
    assert_eq!(driver.read_temperature().unwrap(), 0x123);

    xm.set_temperature_data(0x3FFF);
    assert_eq!(driver.read_temperature().unwrap(), -1);
}

#[test]
fn test_temperature_reads_both_bytes() {
    let (mut driver, _gyro, xm) = create_mock_driver();

    xm.clear_operations();
    xm.set_temperature_data(0x123);
    xm.clear_operations();
    driver.read_temperature().unwrap();
    assert_eq!(xm.operations().len(), 2);
}
