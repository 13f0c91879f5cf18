//! Gyro capability

/// Gyro axis under test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroAxis {
    /// Rotation about the vertical axis
    Yaw,
    /// Rotation about the lateral axis
    Pitch,
}

impl GyroAxis {
    /// Display name used in status text
    pub fn label(&self) -> &'static str {
        match self {
            GyroAxis::Yaw => "yaw",
            GyroAxis::Pitch => "pitch",
        }
    }
}

/// Inertial sensor queries
pub trait Gyro {
    /// True when the gyro is responding on the bus
    fn connected(&self) -> bool;

    /// Zero the heading reference
    fn reset_heading(&mut self);

    /// Yaw angle in decidegrees
    fn yaw_ddeg(&self) -> i16;

    /// Pitch angle in decidegrees
    fn pitch_ddeg(&self) -> i16;
}
