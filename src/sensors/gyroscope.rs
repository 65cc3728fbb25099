//! Gyroscope sensor types and configuration
//!
//! Provides types, enums, and utility functions for the LSM9DS0's 3-axis
//! gyroscope sub-device.

/// Gyroscope full-scale range
///
/// The discriminant is the FS[1:0] bit pattern written to `CTRL_REG4_G`;
/// never reorder or renumber these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroScale {
    /// ±245°/s range
    Dps245 = 0b00,
    /// ±500°/s range
    Dps500 = 0b01,
    /// ±2000°/s range
    Dps2000 = 0b10,
}

impl GyroScale {
    /// Get the resolution in (°/s)/LSB for this range
    ///
    /// Raw readings multiplied by this value give degrees per second.
    #[must_use]
    pub const fn resolution(self) -> f32 {
        match self {
            Self::Dps245 => 245.0 / 32768.0,
            Self::Dps500 => 500.0 / 32768.0,
            Self::Dps2000 => 2000.0 / 32768.0,
        }
    }

    /// Get the maximum representable value in °/s
    #[must_use]
    pub const fn full_scale_dps(self) -> u16 {
        match self {
            Self::Dps245 => 245,
            Self::Dps500 => 500,
            Self::Dps2000 => 2000,
        }
    }
}

/// Gyroscope output data rate and bandwidth selection
///
/// The LSM9DS0 encodes ODR and low-pass cutoff together in the DR/BW bits of
/// `CTRL_REG1_G`; only the listed combinations are defined (0x2 and 0x3
/// duplicate the first two and are omitted). The discriminant is the 4-bit
/// register pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroOdr {
    /// 95 Hz ODR, 12.5 Hz cutoff
    Odr95Bw12_5 = 0x0,
    /// 95 Hz ODR, 25 Hz cutoff
    Odr95Bw25 = 0x1,
    /// 190 Hz ODR, 12.5 Hz cutoff
    Odr190Bw12_5 = 0x4,
    /// 190 Hz ODR, 25 Hz cutoff
    Odr190Bw25 = 0x5,
    /// 190 Hz ODR, 50 Hz cutoff
    Odr190Bw50 = 0x6,
    /// 190 Hz ODR, 70 Hz cutoff
    Odr190Bw70 = 0x7,
    /// 380 Hz ODR, 20 Hz cutoff
    Odr380Bw20 = 0x8,
    /// 380 Hz ODR, 25 Hz cutoff
    Odr380Bw25 = 0x9,
    /// 380 Hz ODR, 50 Hz cutoff
    Odr380Bw50 = 0xA,
    /// 380 Hz ODR, 100 Hz cutoff
    Odr380Bw100 = 0xB,
    /// 760 Hz ODR, 30 Hz cutoff
    Odr760Bw30 = 0xC,
    /// 760 Hz ODR, 35 Hz cutoff
    Odr760Bw35 = 0xD,
    /// 760 Hz ODR, 50 Hz cutoff
    Odr760Bw50 = 0xE,
    /// 760 Hz ODR, 100 Hz cutoff
    Odr760Bw100 = 0xF,
}

impl GyroOdr {
    /// Get the output data rate in Hz
    #[must_use]
    pub const fn output_data_rate_hz(self) -> u16 {
        match self {
            Self::Odr95Bw12_5 | Self::Odr95Bw25 => 95,
            Self::Odr190Bw12_5 | Self::Odr190Bw25 | Self::Odr190Bw50 | Self::Odr190Bw70 => 190,
            Self::Odr380Bw20 | Self::Odr380Bw25 | Self::Odr380Bw50 | Self::Odr380Bw100 => 380,
            Self::Odr760Bw30 | Self::Odr760Bw35 | Self::Odr760Bw50 | Self::Odr760Bw100 => 760,
        }
    }

    /// Get the low-pass cutoff frequency in Hz
    #[must_use]
    pub const fn cutoff_hz(self) -> f32 {
        match self {
            Self::Odr95Bw12_5 | Self::Odr190Bw12_5 => 12.5,
            Self::Odr95Bw25 | Self::Odr190Bw25 | Self::Odr380Bw25 => 25.0,
            Self::Odr190Bw50 | Self::Odr380Bw50 | Self::Odr760Bw50 => 50.0,
            Self::Odr190Bw70 => 70.0,
            Self::Odr380Bw20 => 20.0,
            Self::Odr380Bw100 | Self::Odr760Bw100 => 100.0,
            Self::Odr760Bw30 => 30.0,
            Self::Odr760Bw35 => 35.0,
        }
    }
}

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f32,
    /// Y-axis rotation rate in °/s
    pub y: f32,
    /// Z-axis rotation rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `resolution` - Resolution in (°/s)/LSB (from [`GyroScale::resolution`])
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, resolution: f32) -> Self {
        Self {
            x: f32::from(raw_x) * resolution,
            y: f32::from(raw_y) * resolution,
            z: f32::from(raw_z) * resolution,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
