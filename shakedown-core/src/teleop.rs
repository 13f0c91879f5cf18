//! Teleop pass-through
//!
//! While the teleop override level is on, console sticks drive the chassis
//! and the arm directly, independent of checklist progress. Inputs get a
//! deadband and sign-preserving squared scaling for fine control near
//! center. All math is signed permille.

use crate::config::ChecklistConfig;
use crate::traits::{ArmAxis, Rig};

/// Full-scale permille value
const FULL_SCALE: i32 = 1000;

/// Apply a deadband and rescale the remaining range to full scale
///
/// Inputs inside the band map to zero; the band edge maps to zero and
/// full deflection still reaches full scale.
pub fn apply_deadband(value: i16, band: i16) -> i16 {
    let band = band.unsigned_abs() as i32;
    if band >= FULL_SCALE {
        return 0;
    }
    let v = value as i32;
    if v.abs() <= band {
        return 0;
    }
    let rescaled = (v.abs() - band) * FULL_SCALE / (FULL_SCALE - band);
    (rescaled.min(FULL_SCALE) * v.signum()) as i16
}

/// Sign-preserving square, permille in and out
pub fn square_input(value: i16) -> i16 {
    let v = (value as i32).clamp(-FULL_SCALE, FULL_SCALE);
    (v * v.abs() / FULL_SCALE) as i16
}

/// Scale a permille value by a permille factor
fn scale(value: i16, factor: i16) -> i16 {
    (value as i32 * factor as i32 / FULL_SCALE) as i16
}

/// Drive the chassis and arm straight from the console sticks
pub fn passthrough(rig: &mut dyn Rig, config: &ChecklistConfig) {
    let band = config.stick_deadband;

    let arm = rig.arm_input();
    let lift = apply_deadband(arm.lift, band);
    let extend = apply_deadband(arm.extend, band);
    rig.set_output(ArmAxis::Lift, lift);
    rig.set_output(ArmAxis::Extend, extend);

    let sticks = rig.drive_input();
    let forward = scale(
        square_input(apply_deadband(sticks.forward, band)),
        sticks.drive_scale,
    );
    let strafe = scale(
        square_input(apply_deadband(sticks.strafe, band)),
        sticks.drive_scale,
    );
    let rotate = scale(
        square_input(apply_deadband(sticks.rotate, band)),
        sticks.rotate_scale,
    );
    rig.drive(forward, strafe, rotate);
}
