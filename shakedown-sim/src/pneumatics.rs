//! Simulated pneumatics
//!
//! The tank fills a fixed amount per update while the compressor runs;
//! the pressure switch trips at the full mark. The gripper is a plain
//! binary actuator.

use shakedown_core::traits::Pneumatics;

/// Pressure reading at which the pressure switch trips
pub const FULL_PRESSURE: u16 = 120;
/// Pressure gained per update while the compressor runs
const FILL_RATE: u16 = 6;

/// Compressor, tank, and gripper model
#[derive(Debug, Clone, Copy)]
pub struct SimPneumatics {
    pressure: u16,
    compressor_on: bool,
    grip_closed: bool,
    fault: bool,
}

impl SimPneumatics {
    /// Empty tank, compressor off, gripper open
    pub fn new() -> Self {
        Self {
            pressure: 0,
            compressor_on: false,
            grip_closed: false,
            fault: false,
        }
    }

    /// Advance the tank one tick
    pub fn update(&mut self) {
        if self.compressor_on && self.pressure < FULL_PRESSURE {
            self.pressure = (self.pressure + FILL_RATE).min(FULL_PRESSURE);
        }
    }

    pub fn pressure(&self) -> u16 {
        self.pressure
    }

    pub fn compressor_on(&self) -> bool {
        self.compressor_on
    }

    pub fn grip_closed(&self) -> bool {
        self.grip_closed
    }

    /// Dump the tank
    pub fn vent(&mut self) {
        self.pressure = 0;
    }

    /// Stage a bus fault on the pneumatic hub
    pub fn set_fault(&mut self, fault: bool) {
        self.fault = fault;
    }
}

impl Default for SimPneumatics {
    fn default() -> Self {
        Self::new()
    }
}

impl Pneumatics for SimPneumatics {
    fn enable_compressor(&mut self) {
        self.compressor_on = true;
    }

    fn disable_compressor(&mut self) {
        self.compressor_on = false;
    }

    fn pressure_low(&self) -> bool {
        self.pressure < FULL_PRESSURE
    }

    fn grip_close(&mut self) {
        self.grip_closed = true;
    }

    fn grip_open(&mut self) {
        self.grip_closed = false;
    }

    fn pneumatic_fault(&self) -> bool {
        self.fault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_builds_only_while_running() {
        let mut pneumatics = SimPneumatics::new();
        pneumatics.update();
        assert_eq!(pneumatics.pressure(), 0);

        pneumatics.enable_compressor();
        pneumatics.update();
        assert!(pneumatics.pressure() > 0);
        assert!(pneumatics.pressure_low());
    }

    #[test]
    fn test_switch_trips_at_full_and_holds() {
        let mut pneumatics = SimPneumatics::new();
        pneumatics.enable_compressor();
        for _ in 0..100 {
            pneumatics.update();
        }
        assert_eq!(pneumatics.pressure(), FULL_PRESSURE);
        assert!(!pneumatics.pressure_low());

        pneumatics.vent();
        assert!(pneumatics.pressure_low());
    }
}
