//! Step model
//!
//! Each step carries a stable identifier, display data, the behavior
//! selected for it at construction time, and its mutable evaluation state
//! (phase counter, status line, completion flag).

use heapless::{String, Vec};

use super::{MAX_CHILDREN, MAX_STATUS_LEN};
use crate::traits::{ArmAxis, ConsoleRole, GyroAxis};

/// Stable step identifier
///
/// Aggregate steps name their children by identifier; identifiers are
/// resolved to list positions once, when the checklist is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepId {
    Battery,
    DeviceScan,
    Module0,
    Module1,
    Module2,
    Module3,
    Modules,
    GyroYaw,
    GyroPitch,
    Gyro,
    ExtendSwitch,
    LiftSwitch,
    TravelSwitches,
    ArmCalibrate,
    ArmMaxLift,
    ArmMaxExtend,
    ArmZero,
    Arm,
    Compressor,
    LeakCheck,
    GripperCycle,
    Pneumatics,
    DriverConsole,
    OperatorConsole,
    Consoles,
    AllComplete,
}

/// Behavior selected for a step at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CheckKind {
    /// Battery voltage against the configured minimum
    Battery,
    /// Bus connectivity scan across every device
    DeviceScan,
    /// Spin one drive module and have the operator confirm it
    DriveModule(u8),
    /// Zero the gyro and stream one axis while the operator moves the frame
    GyroAxis(GyroAxis),
    /// Operator presses and releases one arm travel switch
    TravelSwitch(ArmAxis),
    /// Home both arm axes onto their switches and zero the encoders
    ArmCalibrate,
    /// Seek one arm axis to its maximum position
    ArmToMax(ArmAxis),
    /// Return the arm to the zero position, extend first
    ArmToZero,
    /// Run the compressor up to full pressure
    Compressor,
    /// Operator confirms the plumbing holds pressure
    LeakCheck,
    /// Close, open, close the gripper on operator edges
    GripperCycle,
    /// Operator exercises every console axis and button
    Console(ConsoleRole),
    /// Completion is the AND of the named children
    Aggregate(&'static [StepId]),
    /// Terminal gate: AND of every main step
    AllComplete,
}

impl CheckKind {
    /// True for the two completion-aggregation behaviors
    pub fn is_aggregate(&self) -> bool {
        matches!(self, CheckKind::Aggregate(_) | CheckKind::AllComplete)
    }
}

/// One checklist entry
#[derive(Debug, Clone)]
pub struct Step {
    id: StepId,
    title: &'static str,
    group: u8,
    check: CheckKind,
    /// Child list positions, resolved at build time (aggregates only)
    pub(crate) children: Vec<u8, MAX_CHILDREN>,
    /// Micro-state-machine counter; non-decreasing within a reset epoch
    phase: u8,
    status: String<MAX_STATUS_LEN>,
    complete: bool,
}

impl Step {
    pub(crate) fn new(id: StepId, title: &'static str, group: u8, check: CheckKind) -> Self {
        Self {
            id,
            title,
            group,
            check,
            children: Vec::new(),
            phase: 0,
            status: String::new(),
            complete: false,
        }
    }

    /// Stable identifier
    pub fn id(&self) -> StepId {
        self.id
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Display column; 0 marks a main step
    pub fn group(&self) -> u8 {
        self.group
    }

    /// True for main (group 0) steps
    pub fn is_main(&self) -> bool {
        self.group == 0
    }

    /// Selected behavior
    pub fn check(&self) -> CheckKind {
        self.check
    }

    /// Current operator-facing status line
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Current completion flag
    pub fn complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn phase(&self) -> u8 {
        self.phase
    }

    /// Move the micro-state-machine forward; phases never go backward
    /// within an epoch
    pub(crate) fn enter_phase(&mut self, phase: u8) {
        debug_assert!(phase >= self.phase);
        self.phase = phase;
    }

    pub(crate) fn set_status(&mut self, text: &str) {
        self.status.clear();
        if self.status.push_str(text).is_err() {
            // Oversized text is kept, truncated to capacity
            for c in text.chars() {
                if self.status.push(c).is_err() {
                    break;
                }
            }
        }
    }

    pub(crate) fn set_status_fmt(&mut self, args: core::fmt::Arguments<'_>) {
        self.status.clear();
        let _ = core::fmt::write(&mut self.status, args);
    }

    /// Leaf completion: sticky until the next reset
    pub(crate) fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Aggregate completion: recomputed fresh every evaluation
    pub(crate) fn set_aggregate_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    /// Skip support: force the flag down without touching phase or status
    pub(crate) fn force_incomplete(&mut self) {
        self.complete = false;
    }

    /// Return to the epoch-initial state
    pub(crate) fn reset(&mut self) {
        self.phase = 0;
        self.status.clear();
        self.complete = false;
    }
}
