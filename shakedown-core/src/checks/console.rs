//! Operator console exercise check
//!
//! The console implementation does the watching: `exercise_start` clears
//! its seen-record and `exercise_complete` reports once every axis and
//! button has been active. This check just sequences the operator through
//! it.

use super::CheckContext;
use crate::checklist::Step;
use crate::traits::ConsoleRole;

/// Arm the exercise, then wait until every control has been seen active
pub(crate) fn exercise(step: &mut Step, ctx: &mut CheckContext<'_>, role: ConsoleRole) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.exercise_start(role);
                step.enter_phase(1);
                step.set_status_fmt(format_args!(
                    "work every {} axis and button",
                    role.label()
                ));
            } else {
                step.set_status_fmt(format_args!(
                    "press advance, then work every {} control",
                    role.label()
                ));
            }
        }
        1 => {
            if ctx.rig.exercise_complete(role) {
                step.enter_phase(2);
                step.set_status_fmt(format_args!("{} console complete", role.label()));
                step.mark_complete();
            } else {
                step.set_status_fmt(format_args!(
                    "work every {} axis and button",
                    role.label()
                ));
            }
        }
        _ => step.set_status_fmt(format_args!("{} console complete", role.label())),
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

    fn run(step: &mut Step, rig: &mut BenchRig, latch: &mut SignalLatch) -> bool {
        let config = ChecklistConfig::default();
        let mut ctx = CheckContext {
            rig,
            controls: latch,
            config: &config,
        };
        exercise(step, &mut ctx, ConsoleRole::Driver)
    }

    fn make_step() -> Step {
        Step::new(
            StepId::DriverConsole,
            "8a. Driver Console",
            2,
            CheckKind::Console(ConsoleRole::Driver),
        )
    }

    #[test]
    fn test_waits_for_advance_before_arming() {
        let mut step = make_step();
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        assert!(!run(&mut step, &mut rig, &mut latch));
        assert!(!rig.exercise_active[0]);
        assert_eq!(step.status(), "press advance, then work every driver control");
    }

    #[test]
    fn test_arms_then_polls_to_completion() {
        let mut step = make_step();
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        latch.press_advance();
        assert!(!run(&mut step, &mut rig, &mut latch));
        assert!(rig.exercise_active[0]);
        assert_eq!(step.status(), "work every driver axis and button");

        // Operator still working through the controls
        for _ in 0..30 {
            assert!(!run(&mut step, &mut rig, &mut latch));
        }

        rig.exercise_done[0] = true;
        assert!(run(&mut step, &mut rig, &mut latch));
        assert_eq!(step.status(), "driver console complete");
    }
}
