#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod display;
pub mod imu;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use display::{Framebuffer, MicroOled, PixelMode};
pub use imu::{AccelData, GyroData, ImuConfig, Lsm9ds0Driver, MagData};
pub use interface::{I2cInterface, SpiInterface};
pub use sensors::{
    AccelBandwidth, AccelDataG, AccelOdr, AccelScale, GyroDataDps, GyroOdr, GyroScale, MagDataGs,
    MagOdr, MagScale,
};

/// LSM9DS0 gyroscope I2C address when SDO_G is pulled high (default on the
/// 9DOF block: 0x6B)
pub const I2C_ADDRESS_GYRO: u8 = 0x6B;

/// LSM9DS0 gyroscope I2C address when SDO_G is pulled low (alternative: 0x6A)
pub const I2C_ADDRESS_GYRO_ALT: u8 = 0x6A;

/// LSM9DS0 accelerometer/magnetometer ("XM") I2C address when SDO_XM is
/// pulled high (default on the 9DOF block: 0x1D)
pub const I2C_ADDRESS_XM: u8 = 0x1D;

/// LSM9DS0 accelerometer/magnetometer I2C address when SDO_XM is pulled low
/// (alternative: 0x1E)
pub const I2C_ADDRESS_XM_ALT: u8 = 0x1E;

/// Expected value of the gyroscope `WHO_AM_I_G` register
pub const WHO_AM_I_GYRO: u8 = 0xD4;

/// Expected value of the accelerometer/magnetometer `WHO_AM_I_XM` register
pub const WHO_AM_I_XM: u8 = 0x49;

/// Known-good verification code returned by [`Lsm9ds0Driver::begin`]
///
/// High byte is the XM identity readback, low byte is the gyro identity
/// readback. A different value means at least one sub-device answered with an
/// unexpected identity, usually a wiring or address-strap fault.
pub const VERIFICATION_CODE: u16 = ((WHO_AM_I_XM as u16) << 8) | WHO_AM_I_GYRO as u16;

/// IMU driver errors
///
/// Generic over the transport error so platform bus errors surface
/// unchanged. The driver never retries: each failed transaction is reported
/// to the caller of the specific operation.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with one of the two sub-devices
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

/// Display driver errors
///
/// SPI and GPIO failures are kept apart so callers can tell a bus fault from
/// a pin fault.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<SpiE, PinE> {
    /// SPI transfer failed
    Spi(SpiE),
    /// Data/command-select or reset line could not be driven
    Pin(PinE),
}
