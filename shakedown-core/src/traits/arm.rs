//! Arm capability
//!
//! The arm has two motorized axes. Each axis has an incremental encoder
//! and a travel switch at the low end of its range; encoder zero is
//! established by driving onto the switch during calibration.

/// Arm axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArmAxis {
    /// Vertical lift axis
    Lift,
    /// Horizontal extend axis
    Extend,
}

impl ArmAxis {
    /// Display name used in status text
    pub fn label(&self) -> &'static str {
        match self {
            ArmAxis::Lift => "lift",
            ArmAxis::Extend => "extend",
        }
    }
}

/// Arm axis commands and queries
pub trait Arm {
    /// True when the axis travel switch is closed
    fn at_low_stop(&self, axis: ArmAxis) -> bool;

    /// Axis position in encoder ticks
    fn position(&self, axis: ArmAxis) -> i32;

    /// Open-loop axis output in signed permille
    ///
    /// Zero stops the axis. Re-issuing the same output must be harmless.
    fn set_output(&mut self, axis: ArmAxis, output: i16);

    /// Closed-loop seek to a position in encoder ticks
    fn seek_position(&mut self, axis: ArmAxis, target: i32);

    /// Declare the current position to be encoder zero
    fn zero_encoder(&mut self, axis: ArmAxis);

    /// True when the axis motor controller is responding on the bus
    fn motor_ok(&self, axis: ArmAxis) -> bool;
}
