//! Arm checks: travel switches, calibration, range of motion
//!
//! The travel switch checks are hardware-gated with no timeout: the step
//! waits on the physical switch for as long as it takes. Calibration homes
//! each axis onto its switch and declares that position encoder zero; the
//! range checks then seek the calibrated maxima closed-loop.

use super::CheckContext;
use crate::checklist::Step;
use crate::config::ChecklistConfig;
use crate::traits::ArmAxis;

/// Output that backs an axis away from its closed travel switch
fn release_output(config: &ChecklistConfig, axis: ArmAxis) -> i16 {
    match axis {
        ArmAxis::Lift => config.lift_release_output,
        ArmAxis::Extend => config.extend_release_output,
    }
}

/// Output that homes an axis onto its travel switch
fn home_output(config: &ChecklistConfig, axis: ArmAxis) -> i16 {
    match axis {
        ArmAxis::Lift => config.lift_home_output,
        ArmAxis::Extend => config.extend_home_output,
    }
}

fn max_position(config: &ChecklistConfig, axis: ArmAxis) -> i32 {
    match axis {
        ArmAxis::Lift => config.lift_max_pos,
        ArmAxis::Extend => config.extend_max_pos,
    }
}

fn tolerance(config: &ChecklistConfig, axis: ArmAxis) -> i32 {
    match axis {
        ArmAxis::Lift => config.lift_tolerance,
        ArmAxis::Extend => config.extend_tolerance,
    }
}

/// Operator presses and releases one travel switch
///
/// Phase 0 backs the axis off the switch if it starts closed, then stops
/// the motor. Phase 1 waits for the press, phase 2 for the release. The
/// condition is re-checked every cycle; a missing press stalls the step
/// indefinitely.
pub(crate) fn travel_switch(step: &mut Step, ctx: &mut CheckContext<'_>, axis: ArmAxis) -> bool {
    match step.phase() {
        0 => {
            if ctx.rig.at_low_stop(axis) {
                ctx.rig.set_output(axis, release_output(ctx.config, axis));
                step.set_status_fmt(format_args!(
                    "backing the {} axis off its switch",
                    axis.label()
                ));
            } else {
                ctx.rig.set_output(axis, 0);
                step.enter_phase(1);
                step.set_status_fmt(format_args!("press the {} travel switch", axis.label()));
            }
        }
        1 => {
            if ctx.rig.at_low_stop(axis) {
                step.enter_phase(2);
                step.set_status_fmt(format_args!("release the {} travel switch", axis.label()));
            } else {
                step.set_status_fmt(format_args!("press the {} travel switch", axis.label()));
            }
        }
        2 => {
            if !ctx.rig.at_low_stop(axis) {
                step.enter_phase(3);
                step.set_status_fmt(format_args!("{} travel switch complete", axis.label()));
                step.mark_complete();
            } else {
                step.set_status_fmt(format_args!("release the {} travel switch", axis.label()));
            }
        }
        _ => step.set_status_fmt(format_args!("{} travel switch complete", axis.label())),
    }
    step.complete()
}

/// Home both axes onto their switches and zero the encoders
///
/// Extend first so the arm cannot foul the frame while the lift comes
/// down. Each homing output is issued once; the switch stops the axis.
pub(crate) fn calibrate(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                step.enter_phase(1);
                if !ctx.rig.at_low_stop(ArmAxis::Extend) {
                    ctx.rig
                        .set_output(ArmAxis::Extend, home_output(ctx.config, ArmAxis::Extend));
                }
                step.set_status("homing the extend axis");
            } else {
                step.set_status("press advance to calibrate the arm");
            }
        }
        1 => {
            if ctx.rig.at_low_stop(ArmAxis::Extend) {
                ctx.rig.set_output(ArmAxis::Extend, 0);
                ctx.rig.zero_encoder(ArmAxis::Extend);
                step.enter_phase(2);
                if !ctx.rig.at_low_stop(ArmAxis::Lift) {
                    ctx.rig
                        .set_output(ArmAxis::Lift, home_output(ctx.config, ArmAxis::Lift));
                }
                step.set_status("homing the lift axis");
            } else {
                step.set_status("homing the extend axis");
            }
        }
        2 => {
            if ctx.rig.at_low_stop(ArmAxis::Lift) {
                ctx.rig.set_output(ArmAxis::Lift, 0);
                ctx.rig.zero_encoder(ArmAxis::Lift);
                step.enter_phase(3);
                step.set_status("arm calibrated");
                step.mark_complete();
            } else {
                step.set_status("homing the lift axis");
            }
        }
        _ => step.set_status("arm calibrated"),
    }
    step.complete()
}

/// Seek one axis to its configured maximum
///
/// Completes when the position settles inside the axis tolerance; the
/// status shows live progress until then.
pub(crate) fn to_max(step: &mut Step, ctx: &mut CheckContext<'_>, axis: ArmAxis) -> bool {
    let target = max_position(ctx.config, axis);
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.seek_position(axis, target);
                step.enter_phase(1);
                step.set_status_fmt(format_args!("seeking {} to {}", axis.label(), target));
            } else {
                step.set_status_fmt(format_args!(
                    "press advance to run {} to its maximum",
                    axis.label()
                ));
            }
        }
        1 => {
            let pos = ctx.rig.position(axis);
            if (pos - target).abs() < tolerance(ctx.config, axis) {
                step.enter_phase(2);
                step.set_status_fmt(format_args!(
                    "{} at maximum, measure and log",
                    axis.label()
                ));
                step.mark_complete();
            } else {
                step.set_status_fmt(format_args!("{} at {} / {}", axis.label(), pos, target));
            }
        }
        _ => step.set_status_fmt(format_args!("{} at maximum, measure and log", axis.label())),
    }
    step.complete()
}

/// Return the arm to the zero position, extend first
pub(crate) fn to_zero(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.seek_position(ArmAxis::Extend, 0);
                step.enter_phase(1);
                step.set_status("retracting the extend axis");
            } else {
                step.set_status("press advance to return the arm to zero");
            }
        }
        1 => {
            if ctx.rig.position(ArmAxis::Extend) < ctx.config.extend_tolerance {
                ctx.rig.seek_position(ArmAxis::Lift, 0);
                step.enter_phase(2);
                step.set_status("lowering the lift axis");
            } else {
                step.set_status("retracting the extend axis");
            }
        }
        2 => {
            if ctx.rig.position(ArmAxis::Lift) < ctx.config.lift_tolerance {
                step.enter_phase(3);
                step.set_status("arm at zero");
                step.mark_complete();
            } else {
                step.set_status("lowering the lift axis");
            }
        }
        _ => step.set_status("arm at zero"),
    }
    step.complete()
}
