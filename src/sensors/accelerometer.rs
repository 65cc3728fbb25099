//! Accelerometer sensor types and configuration
//!
//! Provides types, enums, and utility functions for the accelerometer half of
//! the LSM9DS0's XM sub-device.

/// Accelerometer full-scale range
///
/// The discriminant is the AFS[2:0] bit pattern written to `CTRL_REG2_XM`;
/// never reorder or renumber these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelScale {
    /// ±2g range
    G2 = 0b000,
    /// ±4g range
    G4 = 0b001,
    /// ±6g range
    G6 = 0b010,
    /// ±8g range
    G8 = 0b011,
    /// ±16g range
    G16 = 0b100,
}

impl AccelScale {
    /// Get the resolution in g/LSB for this range
    ///
    /// Raw readings multiplied by this value give g-force. The steps are
    /// 2g apart up to 8g; the top of the range then jumps straight to 16g,
    /// so the value cannot be derived from the bit pattern alone.
    #[must_use]
    pub const fn resolution(self) -> f32 {
        match self {
            Self::G2 => 2.0 / 32768.0,
            Self::G4 => 4.0 / 32768.0,
            Self::G6 => 6.0 / 32768.0,
            Self::G8 => 8.0 / 32768.0,
            Self::G16 => 16.0 / 32768.0,
        }
    }

    /// Get the maximum representable value in g
    #[must_use]
    pub const fn full_scale_g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G6 => 6,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Accelerometer output data rate
///
/// The discriminant is the AODR[3:0] bit pattern written to `CTRL_REG1_XM`.
/// `PowerDown` stops the accelerometer stage entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelOdr {
    /// Power-down mode
    PowerDown = 0x0,
    /// 3.125 Hz
    Hz3_125 = 0x1,
    /// 6.25 Hz
    Hz6_25 = 0x2,
    /// 12.5 Hz
    Hz12_5 = 0x3,
    /// 25 Hz
    Hz25 = 0x4,
    /// 50 Hz
    Hz50 = 0x5,
    /// 100 Hz
    Hz100 = 0x6,
    /// 200 Hz
    Hz200 = 0x7,
    /// 400 Hz
    Hz400 = 0x8,
    /// 800 Hz
    Hz800 = 0x9,
    /// 1600 Hz
    Hz1600 = 0xA,
}

impl AccelOdr {
    /// Get the output data rate in Hz, or `None` for power-down
    #[must_use]
    pub const fn output_data_rate_hz(self) -> Option<f32> {
        match self {
            Self::PowerDown => None,
            Self::Hz3_125 => Some(3.125),
            Self::Hz6_25 => Some(6.25),
            Self::Hz12_5 => Some(12.5),
            Self::Hz25 => Some(25.0),
            Self::Hz50 => Some(50.0),
            Self::Hz100 => Some(100.0),
            Self::Hz200 => Some(200.0),
            Self::Hz400 => Some(400.0),
            Self::Hz800 => Some(800.0),
            Self::Hz1600 => Some(1600.0),
        }
    }
}

/// Accelerometer anti-alias filter bandwidth
///
/// The discriminant is the ABW[1:0] bit pattern written to `CTRL_REG2_XM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelBandwidth {
    /// 773 Hz
    Hz773 = 0b00,
    /// 194 Hz
    Hz194 = 0b01,
    /// 362 Hz
    Hz362 = 0b10,
    /// 50 Hz
    Hz50 = 0b11,
}

impl AccelBandwidth {
    /// Get the filter bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz773 => 773,
            Self::Hz194 => 194,
            Self::Hz362 => 362,
            Self::Hz50 => 50,
        }
    }
}

/// Accelerometer data in g
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `resolution` - Resolution in g/LSB (from [`AccelScale::resolution`])
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, resolution: f32) -> Self {
        Self {
            x: f32::from(raw_x) * resolution,
            y: f32::from(raw_y) * resolution,
            z: f32::from(raw_z) * resolution,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
