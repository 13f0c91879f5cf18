//! Pneumatics capability

/// Compressor and gripper actuator control
pub trait Pneumatics {
    /// Enable the compressor (digital closed-loop on the pressure switch)
    fn enable_compressor(&mut self);

    /// Disable the compressor
    fn disable_compressor(&mut self);

    /// True while stored pressure is below the pressure-switch threshold
    fn pressure_low(&self) -> bool;

    /// Close the gripper
    fn grip_close(&mut self);

    /// Open the gripper
    fn grip_open(&mut self);

    /// True when the pneumatic hub reports a bus fault
    fn pneumatic_fault(&self) -> bool;
}
