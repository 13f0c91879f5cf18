//! Checklist configuration
//!
//! Thresholds and outputs the checks consume. All values are integer
//! fixed-point: millivolts, signed permille outputs, decidegrees, encoder
//! ticks. Configuration can be carried as a postcard-serialized blob when
//! the `serde` feature is enabled.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checklist thresholds and test outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChecklistConfig {
    /// Minimum acceptable battery voltage (mV)
    pub battery_min_mv: u16,
    /// Wheel output commanded during the module spin check (permille)
    pub module_test_output: i16,
    /// Steer angle commanded during the module spin check (decidegrees)
    pub module_test_angle_ddeg: i16,
    /// Lift output used to back the arm off a closed travel switch (permille)
    pub lift_release_output: i16,
    /// Extend output used to back the arm off a closed travel switch (permille)
    pub extend_release_output: i16,
    /// Lift output used to home onto the travel switch (permille)
    pub lift_home_output: i16,
    /// Extend output used to home onto the travel switch (permille)
    pub extend_home_output: i16,
    /// Lift axis maximum position (encoder ticks)
    pub lift_max_pos: i32,
    /// Lift axis position tolerance (encoder ticks)
    pub lift_tolerance: i32,
    /// Extend axis maximum position (encoder ticks)
    pub extend_max_pos: i32,
    /// Extend axis position tolerance (encoder ticks)
    pub extend_tolerance: i32,
    /// Stick deadband for the teleop pass-through (permille)
    pub stick_deadband: i16,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            battery_min_mv: 12_000,
            module_test_output: 500,
            module_test_angle_ddeg: 900,
            lift_release_output: 150,
            extend_release_output: 100,
            lift_home_output: -150,
            extend_home_output: -100,
            lift_max_pos: 600,
            lift_tolerance: 5,
            extend_max_pos: 4850,
            extend_tolerance: 20,
            stick_deadband: 100,
        }
    }
}

/// Errors from config blob encode/decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Buffer too small for the encoded config
    Encode,
    /// Blob did not decode to a valid config
    Decode,
}

/// Serialize a config into the given buffer, returning the used prefix
#[cfg(feature = "serde")]
pub fn encode_config<'a>(
    config: &ChecklistConfig,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Encode)
}

/// Deserialize a config from a blob
#[cfg(feature = "serde")]
pub fn decode_config(bytes: &[u8]) -> Result<ChecklistConfig, ConfigError> {
    postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)
}
