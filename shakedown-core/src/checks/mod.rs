//! Step evaluation state machines
//!
//! One module per subsystem. Every function here follows the same
//! contract: called once per tick while its step is current, rewrites the
//! status line on every call, issues only idempotent hardware commands,
//! and returns the step's current completion. Waiting is expressed as
//! "stay in the same phase and return false" — there are no timeouts; a
//! missing physical action stalls the step until the operator skips it.

pub mod arm;
pub mod console;
pub mod drivetrain;
pub mod gyro;
pub mod pneumatics;
pub mod power;

use crate::checklist::{CheckKind, Step};
use crate::config::ChecklistConfig;
use crate::signals::Controls;
use crate::traits::Rig;

/// Everything a leaf check may touch during one evaluation
pub(crate) struct CheckContext<'a> {
    pub rig: &'a mut dyn Rig,
    pub controls: &'a mut dyn Controls,
    pub config: &'a ChecklistConfig,
}

/// Dispatch a leaf step to its behavior
///
/// Aggregates never reach this; the sequencer computes them directly.
pub(crate) fn run(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    match step.check() {
        CheckKind::Battery => power::battery(step, ctx),
        CheckKind::DeviceScan => power::device_scan(step, ctx),
        CheckKind::DriveModule(module) => drivetrain::module_spin(step, ctx, module),
        CheckKind::GyroAxis(axis) => gyro::axis(step, ctx, axis),
        CheckKind::TravelSwitch(axis) => arm::travel_switch(step, ctx, axis),
        CheckKind::ArmCalibrate => arm::calibrate(step, ctx),
        CheckKind::ArmToMax(axis) => arm::to_max(step, ctx, axis),
        CheckKind::ArmToZero => arm::to_zero(step, ctx),
        CheckKind::Compressor => pneumatics::compressor(step, ctx),
        CheckKind::LeakCheck => pneumatics::leak_check(step, ctx),
        CheckKind::GripperCycle => pneumatics::gripper_cycle(step, ctx),
        CheckKind::Console(role) => console::exercise(step, ctx, role),
        CheckKind::Aggregate(_) | CheckKind::AllComplete => step.complete(),
    }
}
