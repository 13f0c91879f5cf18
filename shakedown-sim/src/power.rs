//! Simulated power hub

use shakedown_core::traits::PowerHub;

/// Battery and power-distribution model
///
/// The voltage is set by the test; there is no discharge model.
#[derive(Debug, Clone, Copy)]
pub struct SimPower {
    battery_mv: u16,
    fault: bool,
}

impl SimPower {
    /// A freshly charged battery with a healthy hub
    pub fn new() -> Self {
        Self {
            battery_mv: 12_600,
            fault: false,
        }
    }

    /// Stage a battery voltage
    pub fn set_battery_mv(&mut self, mv: u16) {
        self.battery_mv = mv;
    }

    /// Stage a bus fault on the hub
    pub fn set_fault(&mut self, fault: bool) {
        self.fault = fault;
    }
}

impl Default for SimPower {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerHub for SimPower {
    fn battery_mv(&self) -> u16 {
        self.battery_mv
    }

    fn power_fault(&self) -> bool {
        self.fault
    }
}
