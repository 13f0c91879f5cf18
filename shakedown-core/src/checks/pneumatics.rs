//! Pneumatic checks: compressor, leak check, gripper cycle
//!
//! The compressor is taken out of its closed loop while the checklist
//! runs (see `Checklist::enter`), so the compressor check owns it: the
//! operator starts it and the pressure switch ends the step.

use super::CheckContext;
use crate::checklist::Step;

/// Run the compressor up to full pressure
pub(crate) fn compressor(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.enable_compressor();
                step.enter_phase(1);
                step.set_status("compressor running, building pressure");
            } else {
                step.set_status("press advance to start the compressor");
            }
        }
        1 => {
            if !ctx.rig.pressure_low() {
                step.enter_phase(2);
                step.set_status("full pressure reached");
                step.mark_complete();
            } else {
                step.set_status("compressor running, building pressure");
            }
        }
        _ => step.set_status("full pressure reached"),
    }
    step.complete()
}

/// Operator confirms the plumbing holds pressure
///
/// Nothing here is observable by the engine; the single advance edge is
/// the whole check.
pub(crate) fn leak_check(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                step.enter_phase(1);
                step.set_status("no leaks reported");
                step.mark_complete();
            } else {
                step.set_status("inspect the plumbing, advance if it holds pressure");
            }
        }
        _ => step.set_status("no leaks reported"),
    }
    step.complete()
}

/// Close, open, close the gripper on operator edges
pub(crate) fn gripper_cycle(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.grip_close();
                step.enter_phase(1);
                step.set_status("gripper closed; advance to open");
            } else {
                step.set_status("press advance to close the gripper");
            }
        }
        1 => {
            if ctx.controls.take_advance() {
                ctx.rig.grip_open();
                step.enter_phase(2);
                step.set_status("gripper open; advance to close");
            } else {
                step.set_status("gripper closed; advance to open");
            }
        }
        2 => {
            if ctx.controls.take_advance() {
                ctx.rig.grip_close();
                step.enter_phase(3);
                step.set_status("gripper cycle complete");
                step.mark_complete();
            } else {
                step.set_status("gripper open; advance to close");
            }
        }
        _ => step.set_status("gripper cycle complete"),
    }
    step.complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{CheckKind, StepId};
    use crate::config::ChecklistConfig;
    use crate::signals::SignalLatch;
    use crate::testutil::BenchRig;

    fn run(
        step: &mut Step,
        rig: &mut BenchRig,
        latch: &mut SignalLatch,
        check: fn(&mut Step, &mut CheckContext<'_>) -> bool,
    ) -> bool {
        let config = ChecklistConfig::default();
        let mut ctx = CheckContext {
            rig,
            controls: latch,
            config: &config,
        };
        check(step, &mut ctx)
    }

    #[test]
    fn test_compressor_waits_for_pressure() {
        let mut step = Step::new(StepId::Compressor, "7a. Compressor", 2, CheckKind::Compressor);
        let mut rig = BenchRig::new();
        rig.compressor_on = false; // taken away on checklist enter
        let mut latch = SignalLatch::new();

        assert!(!run(&mut step, &mut rig, &mut latch, compressor));
        assert!(!rig.compressor_on);

        latch.press_advance();
        assert!(!run(&mut step, &mut rig, &mut latch, compressor));
        assert!(rig.compressor_on);
        assert_eq!(step.status(), "compressor running, building pressure");

        // Tank still filling
        for _ in 0..10 {
            assert!(!run(&mut step, &mut rig, &mut latch, compressor));
        }

        rig.pressure_low = false;
        assert!(run(&mut step, &mut rig, &mut latch, compressor));
        assert_eq!(step.status(), "full pressure reached");
    }

    #[test]
    fn test_leak_check_is_single_confirmation() {
        let mut step = Step::new(StepId::LeakCheck, "7b. Leak Check", 4, CheckKind::LeakCheck);
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        assert!(!run(&mut step, &mut rig, &mut latch, leak_check));
        assert_eq!(step.status(), "inspect the plumbing, advance if it holds pressure");

        latch.press_advance();
        assert!(run(&mut step, &mut rig, &mut latch, leak_check));
        assert_eq!(step.status(), "no leaks reported");
    }

    #[test]
    fn test_gripper_cycle_close_open_close() {
        let mut step = Step::new(
            StepId::GripperCycle,
            "7c. Gripper Cycle",
            6,
            CheckKind::GripperCycle,
        );
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        assert!(!run(&mut step, &mut rig, &mut latch, gripper_cycle));
        assert_eq!(rig.grip_commands, 0);

        latch.press_advance();
        assert!(!run(&mut step, &mut rig, &mut latch, gripper_cycle));
        assert!(rig.grip_closed);

        latch.press_advance();
        assert!(!run(&mut step, &mut rig, &mut latch, gripper_cycle));
        assert!(!rig.grip_closed);

        latch.press_advance();
        assert!(run(&mut step, &mut rig, &mut latch, gripper_cycle));
        assert!(rig.grip_closed);
        assert_eq!(rig.grip_commands, 3);
        assert_eq!(step.status(), "gripper cycle complete");
    }

    #[test]
    fn test_gripper_stalls_between_edges() {
        let mut step = Step::new(
            StepId::GripperCycle,
            "7c. Gripper Cycle",
            6,
            CheckKind::GripperCycle,
        );
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        latch.press_advance();
        run(&mut step, &mut rig, &mut latch, gripper_cycle);

        for _ in 0..20 {
            assert!(!run(&mut step, &mut rig, &mut latch, gripper_cycle));
        }
        assert_eq!(rig.grip_commands, 1);
        assert_eq!(step.status(), "gripper closed; advance to open");
    }
}
