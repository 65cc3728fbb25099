//! High-level driver API for the LSM9DS0
//!
//! This module provides a user-friendly interface to the LSM9DS0 9-DOF
//! module, handling register configuration, scale bookkeeping, and data
//! reading across its two sub-devices (gyro and accel/mag).

use crate::registers::{Lsm9ds0Gyro, Lsm9ds0Xm};
use crate::sensors::{
    AccelBandwidth, AccelDataG, AccelOdr, AccelScale, GyroDataDps, GyroOdr, GyroScale, MagDataGs,
    MagOdr, MagScale,
};
use crate::Error;
use device_driver::RegisterInterface;

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Magnetometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagData {
    /// X-axis magnetic field (raw)
    pub x: i16,
    /// Y-axis magnetic field (raw)
    pub y: i16,
    /// Z-axis magnetic field (raw)
    pub z: i16,
}

/// Initial configuration applied by [`Lsm9ds0Driver::begin`]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuConfig {
    /// Gyroscope full-scale range
    pub gyro_scale: GyroScale,
    /// Accelerometer full-scale range
    pub accel_scale: AccelScale,
    /// Magnetometer full-scale range
    pub mag_scale: MagScale,
    /// Gyroscope output data rate / bandwidth pair
    pub gyro_odr: GyroOdr,
    /// Accelerometer output data rate
    pub accel_odr: AccelOdr,
    /// Magnetometer output data rate
    pub mag_odr: MagOdr,
}

impl Default for ImuConfig {
    fn default() -> Self {
        Self {
            gyro_scale: GyroScale::Dps245,
            accel_scale: AccelScale::G2,
            mag_scale: MagScale::Gauss2,
            gyro_odr: GyroOdr::Odr95Bw12_5,
            accel_odr: AccelOdr::Hz50,
            mag_odr: MagOdr::Hz50,
        }
    }
}

// Axis-group output base addresses, read with the auto-increment bit so all
// six bytes arrive in one transaction.
const OUT_X_L_G: u8 = 0x28;
const OUT_X_L_A: u8 = 0x28;
const OUT_X_L_M: u8 = 0x08;
const OUT_TEMP_L_XM: u8 = 0x05;

/// Main driver for the LSM9DS0
///
/// Owns one register device per sub-chip. The two interfaces usually wrap
/// the same physical bus with different device addresses, but any pair of
/// transports with a common error type works.
pub struct Lsm9ds0Driver<GI, XI> {
    gyro: Lsm9ds0Gyro<GI>,
    xm: Lsm9ds0Xm<XI>,
    // Active full-scale settings; the per-LSB resolution each read uses is
    // derived from these, so a scale change transparently rescales later
    // samples.
    gyro_scale: GyroScale,
    accel_scale: AccelScale,
    mag_scale: MagScale,
}

impl<GI, XI, E> Lsm9ds0Driver<GI, XI>
where
    GI: RegisterInterface<AddressType = u8, Error = E>,
    XI: RegisterInterface<AddressType = u8, Error = E>,
{
    /// Create a new LSM9DS0 driver instance
    ///
    /// No bus traffic happens here; call [`begin`](Self::begin) to power up
    /// and configure the device.
    pub fn new(gyro_interface: GI, xm_interface: XI) -> Self {
        Self {
            gyro: Lsm9ds0Gyro::new(gyro_interface),
            xm: Lsm9ds0Xm::new(xm_interface),
            gyro_scale: GyroScale::Dps245,
            accel_scale: AccelScale::G2,
            mag_scale: MagScale::Gauss2,
        }
    }

    /// Power up and configure both sub-devices
    ///
    /// Reads both identity registers, then configures each sensor stage in a
    /// fixed order: power/axis enables first, then output data rate, then
    /// full-scale range. The gyro and XM register groups are configured
    /// independently; they live on separate dies.
    ///
    /// Returns the 16-bit verification code `(xm_id << 8) | gyro_id`.
    /// Compare it against [`crate::VERIFICATION_CODE`] to detect wiring
    /// faults; a mismatch does NOT abort configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with either sub-device fails.
    pub fn begin(&mut self, config: ImuConfig) -> Result<u16, Error<E>> {
        let gyro_id = self.gyro.who_am_ig().read()?.who_am_i();
        let xm_id = self.xm.who_am_i_xm().read()?.who_am_i();

        self.init_gyro()?;
        self.set_gyro_odr(config.gyro_odr)?;
        self.set_gyro_scale(config.gyro_scale)?;

        self.init_accel()?;
        self.set_accel_odr(config.accel_odr)?;
        self.set_accel_scale(config.accel_scale)?;

        self.init_mag()?;
        self.set_mag_odr(config.mag_odr)?;
        self.set_mag_scale(config.mag_scale)?;

        Ok((u16::from(xm_id) << 8) | u16::from(gyro_id))
    }

    /// Turn on the gyroscope and set up its interrupt/DRDY routing
    fn init_gyro(&mut self) -> Result<(), Error<E>> {
        // Normal mode, all axes enabled
        self.gyro.ctrl_reg_1_g().write(|w| {
            w.set_y_enable(true);
            w.set_x_enable(true);
            w.set_z_enable(true);
            w.set_power_up(true);
        })?;

        // High-pass filter: normal mode, highest cutoff
        self.gyro.ctrl_reg_2_g().write(|w| {
            w.set_hpm(0);
            w.set_hpcf(0);
        })?;

        // INT_G enabled (push-pull, active low), data ready on DRDY_G
        self.gyro.ctrl_reg_3_g().write(|w| {
            w.set_i_1_int_1(true);
            w.set_i_2_drdy(true);
        })?;

        // Continuous update, 245 dps until the scale setter runs
        self.gyro.ctrl_reg_4_g().write(|w| {
            w.set_full_scale(GyroScale::Dps245 as u8);
        })?;

        // FIFO and HPF off
        self.gyro.ctrl_reg_5_g().write(|w| {
            w.set_fifo_en(false);
            w.set_hpen(false);
        })?;

        Ok(())
    }

    /// Turn on all accelerometer axes and set up its DRDY routing
    fn init_accel(&mut self) -> Result<(), Error<E>> {
        // FIFO and high-pass routing off
        self.xm.ctrl_reg_0_xm().write(|w| {
            w.set_boot(false);
            w.set_fifo_en(false);
        })?;

        // 50 Hz data rate, x/y/z all enabled, continuous update
        self.xm.ctrl_reg_1_xm().write(|w| {
            w.set_odr(AccelOdr::Hz50 as u8);
            w.set_x_enable(true);
            w.set_y_enable(true);
            w.set_z_enable(true);
        })?;

        // 773 Hz anti-alias bandwidth, 2g until the scale setter runs
        self.xm.ctrl_reg_2_xm().write(|w| {
            w.set_bandwidth(AccelBandwidth::Hz773 as u8);
            w.set_full_scale(AccelScale::G2 as u8);
        })?;

        // Accelerometer data ready on INT1_XM
        self.xm.ctrl_reg_3_xm().write(|w| {
            w.set_p_1_drdya(true);
        })?;

        Ok(())
    }

    /// Turn on the magnetometer in continuous-conversion mode
    fn init_mag(&mut self) -> Result<(), Error<E>> {
        // Temperature sensor on, mag data rate 100 Hz
        self.xm.ctrl_reg_5_xm().write(|w| {
            w.set_temp_enable(true);
            w.set_resolution(0);
            w.set_odr(MagOdr::Hz100 as u8);
        })?;

        // 2 gauss until the scale setter runs
        self.xm.ctrl_reg_6_xm().write(|w| {
            w.set_full_scale(MagScale::Gauss2 as u8);
        })?;

        // Continuous-conversion mode
        self.xm.ctrl_reg_7_xm().write(|w| {
            w.set_mode(0);
            w.set_mlp(false);
        })?;

        // Magnetometer data ready on INT2_XM
        self.xm.ctrl_reg_4_xm().write(|w| {
            w.set_p_2_drdym(true);
        })?;

        // Magnetic interrupt generation on, active-high polarity
        self.xm.int_ctrl_reg_m().write(|w| {
            w.set_mien(true);
            w.set_iea(true);
        })?;

        Ok(())
    }

    /// Set the gyroscope full-scale range
    ///
    /// Only the FS bits of `CTRL_REG4_G` change; BDU, endianness and
    /// self-test bits in the same register are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_scale(&mut self, scale: GyroScale) -> Result<(), Error<E>> {
        self.gyro.ctrl_reg_4_g().modify(|w| {
            w.set_full_scale(scale as u8);
        })?;
        self.gyro_scale = scale;
        Ok(())
    }

    /// Set the accelerometer full-scale range
    ///
    /// Only the AFS bits of `CTRL_REG2_XM` change; the anti-alias bandwidth
    /// and self-test bits in the same register are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_scale(&mut self, scale: AccelScale) -> Result<(), Error<E>> {
        self.xm.ctrl_reg_2_xm().modify(|w| {
            w.set_full_scale(scale as u8);
        })?;
        self.accel_scale = scale;
        Ok(())
    }

    /// Set the magnetometer full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mag_scale(&mut self, scale: MagScale) -> Result<(), Error<E>> {
        self.xm.ctrl_reg_6_xm().modify(|w| {
            w.set_full_scale(scale as u8);
        })?;
        self.mag_scale = scale;
        Ok(())
    }

    /// Set the gyroscope output data rate and bandwidth
    ///
    /// Only the DR/BW bits of `CTRL_REG1_G` change; power and axis-enable
    /// bits in the same register are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_odr(&mut self, odr: GyroOdr) -> Result<(), Error<E>> {
        self.gyro.ctrl_reg_1_g().modify(|w| {
            w.set_odr_bw(odr as u8);
        })?;
        Ok(())
    }

    /// Set the accelerometer output data rate
    ///
    /// Only the AODR bits of `CTRL_REG1_XM` change; block-data-update and
    /// axis-enable bits in the same register are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_odr(&mut self, odr: AccelOdr) -> Result<(), Error<E>> {
        self.xm.ctrl_reg_1_xm().modify(|w| {
            w.set_odr(odr as u8);
        })?;
        Ok(())
    }

    /// Set the accelerometer anti-alias filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_bandwidth(&mut self, bandwidth: AccelBandwidth) -> Result<(), Error<E>> {
        self.xm.ctrl_reg_2_xm().modify(|w| {
            w.set_bandwidth(bandwidth as u8);
        })?;
        Ok(())
    }

    /// Set the magnetometer output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mag_odr(&mut self, odr: MagOdr) -> Result<(), Error<E>> {
        self.xm.ctrl_reg_5_xm().modify(|w| {
            w.set_odr(odr as u8);
        })?;
        Ok(())
    }

    /// Get the active gyroscope full-scale range
    #[must_use]
    pub fn gyro_scale(&self) -> GyroScale {
        self.gyro_scale
    }

    /// Get the active accelerometer full-scale range
    #[must_use]
    pub fn accel_scale(&self) -> AccelScale {
        self.accel_scale
    }

    /// Get the active magnetometer full-scale range
    #[must_use]
    pub fn mag_scale(&self) -> MagScale {
        self.mag_scale
    }

    /// Read gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes. Each call is a fresh bus
    /// transaction; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self) -> Result<GyroData, Error<E>> {
        // Read all 6 bytes in one auto-increment transaction to prevent
        // torn samples. Low byte first per axis.
        let mut buffer = [0u8; 6];
        self.gyro.interface.read_register(OUT_X_L_G, 48, &mut buffer)?;

        let x = i16::from_le_bytes([buffer[0], buffer[1]]);
        let y = i16::from_le_bytes([buffer[2], buffer[3]]);
        let z = i16::from_le_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    /// Read accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self) -> Result<AccelData, Error<E>> {
        let mut buffer = [0u8; 6];
        self.xm.interface.read_register(OUT_X_L_A, 48, &mut buffer)?;

        let x = i16::from_le_bytes([buffer[0], buffer[1]]);
        let y = i16::from_le_bytes([buffer[2], buffer[3]]);
        let z = i16::from_le_bytes([buffer[4], buffer[5]]);

        Ok(AccelData { x, y, z })
    }

    /// Read magnetometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_mag(&mut self) -> Result<MagData, Error<E>> {
        let mut buffer = [0u8; 6];
        self.xm.interface.read_register(OUT_X_L_M, 48, &mut buffer)?;

        let x = i16::from_le_bytes([buffer[0], buffer[1]]);
        let y = i16::from_le_bytes([buffer[2], buffer[3]]);
        let z = i16::from_le_bytes([buffer[4], buffer[5]]);

        Ok(MagData { x, y, z })
    }

    /// Read gyroscope data in degrees per second
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_dps(&mut self) -> Result<GyroDataDps, Error<E>> {
        let raw = self.read_gyro()?;
        Ok(GyroDataDps::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.gyro_scale.resolution(),
        ))
    }

    /// Read accelerometer data in g
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_g(&mut self) -> Result<AccelDataG, Error<E>> {
        let raw = self.read_accel()?;
        Ok(AccelDataG::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.accel_scale.resolution(),
        ))
    }

    /// Read magnetometer data in gauss
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_mag_gauss(&mut self) -> Result<MagDataGs, Error<E>> {
        let raw = self.read_mag()?;
        Ok(MagDataGs::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.mag_scale.resolution(),
        ))
    }

    /// Read the temperature sensor
    ///
    /// The sample is 12-bit two's complement spread over two bytes; the
    /// result is sign-extended from bit 11. Requires the temperature sensor
    /// enable bit set by [`begin`](Self::begin).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.xm
            .interface
            .read_register(OUT_TEMP_L_XM, 16, &mut buffer)?;

        let raw = u16::from_le_bytes(buffer);
        Ok(((raw << 4) as i16) >> 4)
    }

    /// Check whether a fresh gyroscope sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_data_ready(&mut self) -> Result<bool, Error<E>> {
        Ok(self.gyro.status_reg_g().read()?.new_data())
    }

    /// Check whether a fresh accelerometer sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_data_ready(&mut self) -> Result<bool, Error<E>> {
        Ok(self.xm.status_reg_a().read()?.new_data())
    }

    /// Check whether a fresh magnetometer sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_data_ready(&mut self) -> Result<bool, Error<E>> {
        Ok(self.xm.status_reg_m().read()?.new_data())
    }

    /// Check whether gyroscope output has been overwritten before being read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_data_overrun(&mut self) -> Result<bool, Error<E>> {
        Ok(self.gyro.status_reg_g().read()?.overrun())
    }

    /// Check whether accelerometer output has been overwritten before being
    /// read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_data_overrun(&mut self) -> Result<bool, Error<E>> {
        Ok(self.xm.status_reg_a().read()?.overrun())
    }

    /// Check whether magnetometer output has been overwritten before being
    /// read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_data_overrun(&mut self) -> Result<bool, Error<E>> {
        Ok(self.xm.status_reg_m().read()?.overrun())
    }

    /// Consume the driver and return both bus interfaces
    pub fn release(self) -> (GI, XI) {
        (self.gyro.interface, self.xm.interface)
    }
}
