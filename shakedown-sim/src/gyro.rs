//! Simulated gyro

use shakedown_core::traits::Gyro;

/// Inertial sensor model; the test moves the frame by calling
/// [`SimGyro::rotate`] and [`SimGyro::tip`]
#[derive(Debug, Clone, Copy)]
pub struct SimGyro {
    connected: bool,
    yaw_ddeg: i16,
    pitch_ddeg: i16,
}

impl SimGyro {
    /// Connected, level, heading zero
    pub fn new() -> Self {
        Self {
            connected: true,
            yaw_ddeg: 0,
            pitch_ddeg: 0,
        }
    }

    /// Stage bus connectivity
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Rotate the frame about the vertical axis
    pub fn rotate(&mut self, ddeg: i16) {
        self.yaw_ddeg = self.yaw_ddeg.saturating_add(ddeg);
    }

    /// Tip the frame about the lateral axis
    pub fn tip(&mut self, ddeg: i16) {
        self.pitch_ddeg = self.pitch_ddeg.saturating_add(ddeg);
    }
}

impl Default for SimGyro {
    fn default() -> Self {
        Self::new()
    }
}

impl Gyro for SimGyro {
    fn connected(&self) -> bool {
        self.connected
    }

    fn reset_heading(&mut self) {
        self.yaw_ddeg = 0;
        self.pitch_ddeg = 0;
    }

    fn yaw_ddeg(&self) -> i16 {
        self.yaw_ddeg
    }

    fn pitch_ddeg(&self) -> i16 {
        self.pitch_ddeg
    }
}
