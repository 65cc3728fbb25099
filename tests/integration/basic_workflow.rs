//! End-to-end workflow tests exercising both block drivers

use crate::common::{assert_float_eq, create_mock_driver, MockDisplayParts};
use sparkfun_blocks::display::{MicroOled, PixelMode, FONT_5X7};
use sparkfun_blocks::{
    AccelOdr, AccelScale, GyroOdr, GyroScale, ImuConfig, MagOdr, MagScale, VERIFICATION_CODE,
};

#[test]
fn test_imu_bring_up_and_measurement() {
    let (mut driver, gyro, xm) = create_mock_driver();

    let config = ImuConfig {
        gyro_scale: GyroScale::Dps2000,
        accel_scale: AccelScale::G2,
        mag_scale: MagScale::Gauss2,
        gyro_odr: GyroOdr::Odr190Bw50,
        accel_odr: AccelOdr::Hz100,
        mag_odr: MagOdr::Hz50,
    };

    let code = driver.begin(config).unwrap();
    assert_eq!(code, VERIFICATION_CODE);

    // Gyro at 2000 dps: raw 0x4000 reads back as exactly 1000 °/s
    gyro.set_axis_data(0x28, 0x4000, -0x4000, 0);
    gyro.set_register(0x27, 0x08);
    assert!(driver.gyro_data_ready().unwrap());

    let rates = driver.read_gyro_dps().unwrap();
    assert_float_eq(rates.x, 1000.0, 1e-3);
    assert_float_eq(rates.y, -1000.0, 1e-3);
    assert_float_eq(rates.z, 0.0, 1e-6);

    // Accelerometer resting flat: +1 g on Z at the 2g scale
    xm.set_axis_data(0x28, 0, 0, 16384);
    let accel = driver.read_accel_g().unwrap();
    assert_float_eq(accel.z, 1.0, 1e-3);
    assert_float_eq(accel.magnitude(), 1.0, 1e-3);

    // Magnetometer and temperature come from the same die
    xm.set_axis_data(0x08, 8192, 0, 0);
    let field = driver.read_mag_gauss().unwrap();
    assert_float_eq(field.x, 0.5, 1e-3);

    xm.set_temperature_data(0xFF8);
    assert_eq!(driver.read_temperature().unwrap(), -8);
}

#[test]
fn test_rescale_mid_session() {
    let (mut driver, gyro, _xm) = create_mock_driver();
    driver.begin(ImuConfig::default()).unwrap();

    gyro.set_axis_data(0x28, 0x4000, 0, 0);

    // Default 245 dps
    let before = driver.read_gyro_dps().unwrap();
    assert_float_eq(before.x, 122.5, 1e-3);

    // Same raw sample after a scale change reads 8x larger, and the
    // axis-enable bits written at begin() survive the update
    driver.set_gyro_scale(GyroScale::Dps2000).unwrap();
    let after = driver.read_gyro_dps().unwrap();
    assert_float_eq(after.x, 1000.0, 1e-3);
    assert_eq!(gyro.get_register(0x20) & 0x0F, 0x0F);
}

#[test]
fn test_display_draw_and_present() {
    let (parts, spi, dc, rst, mut delay) = MockDisplayParts::new();

    let mut display = MicroOled::new(spi, dc, rst, &mut delay).unwrap();
    assert_eq!(display.width(), 64);
    assert_eq!(display.height(), 48);

    display.draw_text(0, 0, "DPS", &FONT_5X7);
    display.set_pixel(63, 47, PixelMode::Set);
    parts.clear();

    display.present().unwrap();

    let transfers = parts.transfers();
    // 'D' starts at the first column of page 0: [0x7F, 0x41, 0x41, 0x22, 0x1C]
    assert_eq!(transfers[3].bytes[0], 0x7F);
    assert_eq!(transfers[3].bytes[4], 0x1C);
    // The corner pixel lands in the last byte of the last page
    assert_eq!(transfers[23].bytes[63], 0x80);
}

#[test]
fn test_display_clear_blanks_next_frame() {
    let (parts, spi, dc, rst, mut delay) = MockDisplayParts::new();

    let mut display = MicroOled::new(spi, dc, rst, &mut delay).unwrap();
    display.draw_text(0, 8, "XYZ", &FONT_5X7);
    display.clear();
    parts.clear();

    display.present().unwrap();

    for transfer in parts.transfers().iter().filter(|t| t.dc_high) {
        assert!(transfer.bytes.iter().all(|&b| b == 0));
    }
}
