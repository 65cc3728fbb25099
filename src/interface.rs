//! Bus interface implementations for the LSM9DS0
//!
//! This module provides implementations of the `device-driver` traits for
//! I2C and SPI communication with the two LSM9DS0 sub-devices. Each
//! sub-device (gyro, accel/mag) gets its own interface instance; the driver
//! never multiplexes one bus handle between them.

use crate::{I2C_ADDRESS_GYRO, I2C_ADDRESS_XM};
use device_driver::RegisterInterface;

/// Sub-address flag that makes the LSM9DS0 auto-increment the register
/// address on multi-byte transfers (I2C: MSB of the sub-address byte)
const I2C_AUTO_INCREMENT: u8 = 0x80;

/// SPI header flag selecting a read transfer (bit 7)
const SPI_READ: u8 = 0x80;

/// SPI header flag enabling register auto-increment (bit 6)
const SPI_AUTO_INCREMENT: u8 = 0x40;

/// I2C interface for one LSM9DS0 sub-device
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create an interface addressing the gyroscope sub-device (0x6B)
    ///
    /// This matches the address strapping on the SparkFun 9DOF block, where
    /// SDO_G is pulled high.
    pub const fn gyro(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_GYRO,
        }
    }

    /// Create an interface addressing the accelerometer/magnetometer
    /// sub-device (0x1D)
    pub const fn xm(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_XM,
        }
    }

    /// Create an interface with a custom 7-bit device address
    ///
    /// Use this for the alternative strap addresses (0x6A gyro, 0x1E XM).
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C

        // The auto-increment bit makes the chip stream consecutive registers
        // in one transaction, which is how the six output bytes of an axis
        // group are read without torn samples.
        let sub_address = if read_data.len() > 1 {
            address | I2C_AUTO_INCREMENT
        } else {
            address
        };

        self.i2c.write_read(self.address, &[sub_address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C

        let sub_address = if write_data.len() > 1 {
            address | I2C_AUTO_INCREMENT
        } else {
            address
        };

        // Sub-address + data in one buffer; control registers are one byte,
        // so two bytes covers every write the driver issues.
        let mut buffer = [0u8; 9];
        buffer[0] = sub_address;
        let len = write_data.len().min(8);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

/// SPI interface for one LSM9DS0 sub-device
///
/// The 9DOF block can be strapped for 4-wire SPI instead of I2C; each
/// sub-device then has its own chip select. The wrapped peripheral must
/// implement `SpiDevice` (chip-select management included), e.g. via
/// `embedded_hal_bus::spi::ExclusiveDevice`.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI peripheral
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;

        let mut header = address | SPI_READ;
        if read_data.len() > 1 {
            header |= SPI_AUTO_INCREMENT;
        }

        self.spi.transaction(&mut [
            embedded_hal::spi::Operation::Write(&[header]),
            embedded_hal::spi::Operation::Read(read_data),
        ])
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;

        let mut header = address;
        if write_data.len() > 1 {
            header |= SPI_AUTO_INCREMENT;
        }

        self.spi.transaction(&mut [
            embedded_hal::spi::Operation::Write(&[header]),
            embedded_hal::spi::Operation::Write(write_data),
        ])
    }
}
