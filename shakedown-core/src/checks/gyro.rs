//! Gyro axis checks
//!
//! The heading is zeroed on the operator's first edge, then the live axis
//! reading streams into the status line while the operator physically
//! moves the frame. A second edge accepts the reading and completes.

use super::CheckContext;
use crate::checklist::Step;
use crate::traits::GyroAxis;

/// Zero the heading, stream one axis, complete on the second edge
pub(crate) fn axis(step: &mut Step, ctx: &mut CheckContext<'_>, axis: GyroAxis) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.reset_heading();
                step.enter_phase(1);
                step.set_status_fmt(format_args!(
                    "heading zeroed; move the frame in {}",
                    axis.label()
                ));
            } else {
                step.set_status_fmt(format_args!(
                    "press advance to start the {} test",
                    axis.label()
                ));
            }
        }
        1 => {
            if ctx.controls.take_advance() {
                step.enter_phase(2);
                step.set_status_fmt(format_args!("{} test complete", axis.label()));
                step.mark_complete();
            } else {
                let ddeg = match axis {
                    GyroAxis::Yaw => ctx.rig.yaw_ddeg(),
                    GyroAxis::Pitch => ctx.rig.pitch_ddeg(),
                };
                write_ddeg(step, axis.label(), ddeg);
            }
        }
        _ => step.set_status_fmt(format_args!("{} test complete", axis.label())),
    }
    step.complete()
}

/// Write a decidegree reading as a signed decimal degree string
fn write_ddeg(step: &mut Step, label: &str, ddeg: i16) {
    let sign = if ddeg < 0 { "-" } else { "" };
    let mag = ddeg.unsigned_abs();
    step.set_status_fmt(format_args!("{}: {}{}.{} deg", label, sign, mag / 10, mag % 10));
}
