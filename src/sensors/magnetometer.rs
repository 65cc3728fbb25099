//! Magnetometer sensor types and configuration
//!
//! Provides types, enums, and utility functions for the magnetometer half of
//! the LSM9DS0's XM sub-device.

/// Magnetometer full-scale range
///
/// The discriminant is the MFS[1:0] bit pattern written to `CTRL_REG6_XM`;
/// never reorder or renumber these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MagScale {
    /// ±2 gauss range
    Gauss2 = 0b00,
    /// ±4 gauss range
    Gauss4 = 0b01,
    /// ±8 gauss range
    Gauss8 = 0b10,
    /// ±12 gauss range
    Gauss12 = 0b11,
}

impl MagScale {
    /// Get the resolution in Gs/LSB for this range
    ///
    /// Raw readings multiplied by this value give gauss.
    #[must_use]
    pub const fn resolution(self) -> f32 {
        match self {
            Self::Gauss2 => 2.0 / 32768.0,
            Self::Gauss4 => 4.0 / 32768.0,
            Self::Gauss8 => 8.0 / 32768.0,
            Self::Gauss12 => 12.0 / 32768.0,
        }
    }

    /// Get the maximum representable value in gauss
    #[must_use]
    pub const fn full_scale_gauss(self) -> u16 {
        match self {
            Self::Gauss2 => 2,
            Self::Gauss4 => 4,
            Self::Gauss8 => 8,
            Self::Gauss12 => 12,
        }
    }
}

/// Magnetometer output data rate
///
/// The discriminant is the M_ODR[2:0] bit pattern written to `CTRL_REG5_XM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MagOdr {
    /// 3.125 Hz
    Hz3_125 = 0b000,
    /// 6.25 Hz
    Hz6_25 = 0b001,
    /// 12.5 Hz
    Hz12_5 = 0b010,
    /// 25 Hz
    Hz25 = 0b011,
    /// 50 Hz
    Hz50 = 0b100,
    /// 100 Hz
    Hz100 = 0b101,
}

impl MagOdr {
    /// Get the output data rate in Hz
    #[must_use]
    pub const fn output_data_rate_hz(self) -> f32 {
        match self {
            Self::Hz3_125 => 3.125,
            Self::Hz6_25 => 6.25,
            Self::Hz12_5 => 12.5,
            Self::Hz25 => 25.0,
            Self::Hz50 => 50.0,
            Self::Hz100 => 100.0,
        }
    }
}

/// Magnetometer data in gauss
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagDataGs {
    /// X-axis magnetic field in gauss
    pub x: f32,
    /// Y-axis magnetic field in gauss
    pub y: f32,
    /// Z-axis magnetic field in gauss
    pub z: f32,
}

impl MagDataGs {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `resolution` - Resolution in Gs/LSB (from [`MagScale::resolution`])
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, resolution: f32) -> Self {
        Self {
            x: f32::from(raw_x) * resolution,
            y: f32::from(raw_y) * resolution,
            z: f32::from(raw_z) * resolution,
        }
    }

    /// Get the magnitude of the field vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
