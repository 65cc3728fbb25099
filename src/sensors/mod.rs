//! Sensor modules for the LSM9DS0
//!
//! This module provides types, enums, and scale tables for each sensor stage
//! of the LSM9DS0:
//! - Gyroscope (3-axis, own sub-device)
//! - Accelerometer (3-axis, XM sub-device)
//! - Magnetometer (3-axis, XM sub-device)
//!
//! All sensor operations are performed through methods on `Lsm9ds0Driver`.

pub mod accelerometer;
pub mod gyroscope;
pub mod magnetometer;

// Re-export main types
pub use accelerometer::{AccelBandwidth, AccelDataG, AccelOdr, AccelScale};
pub use gyroscope::{GyroDataDps, GyroOdr, GyroScale};
pub use magnetometer::{MagDataGs, MagOdr, MagScale};
