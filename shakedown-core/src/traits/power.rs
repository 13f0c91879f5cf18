//! Power hub capability

/// Battery and power-distribution queries
pub trait PowerHub {
    /// Battery voltage in millivolts
    fn battery_mv(&self) -> u16;

    /// True when the power hub reports a bus fault
    fn power_fault(&self) -> bool;
}
