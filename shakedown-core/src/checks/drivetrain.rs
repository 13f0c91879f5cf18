//! Drive module spin check
//!
//! Each module is exercised alone: the operator starts it with an advance
//! edge, watches the wheel and steer angle, and confirms with a second
//! edge. The engine cannot see wheel motion, so the confirmation is the
//! completion condition.

use super::CheckContext;
use crate::checklist::Step;

/// Spin one drive module and wait for operator confirmation
///
/// Phase 0 waits for an advance edge, then commands the module to the
/// configured test output and steer angle. Phase 1 waits for a second
/// edge, then stops the module and completes.
pub(crate) fn module_spin(step: &mut Step, ctx: &mut CheckContext<'_>, module: u8) -> bool {
    match step.phase() {
        0 => {
            if ctx.controls.take_advance() {
                ctx.rig.test_module(
                    module,
                    ctx.config.module_test_output,
                    ctx.config.module_test_angle_ddeg,
                );
                step.enter_phase(1);
                step.set_status_fmt(format_args!(
                    "verify wheel forward and steer at {} deg, then advance",
                    ctx.config.module_test_angle_ddeg / 10
                ));
            } else {
                step.set_status_fmt(format_args!("press advance to spin module {}", module));
            }
        }
        1 => {
            if ctx.controls.take_advance() {
                ctx.rig.test_module(module, 0, 0);
                step.enter_phase(2);
                step.set_status_fmt(format_args!("module {} stopped", module));
                step.mark_complete();
            }
            // Prompt stays up while the operator watches the wheel
        }
        _ => step.set_status_fmt(format_args!("module {} stopped", module)),
    }
    step.complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{CheckKind, StepId};
    use crate::config::ChecklistConfig;
    use crate::signals::{Controls, SignalLatch};
    use crate::testutil::BenchRig;

    fn make_step() -> Step {
        Step::new(StepId::Module1, "3b. Module 1", 4, CheckKind::DriveModule(1))
    }

    fn run(step: &mut Step, rig: &mut BenchRig, latch: &mut SignalLatch) -> bool {
        let config = ChecklistConfig::default();
        let mut ctx = CheckContext {
            rig,
            controls: latch,
            config: &config,
        };
        module_spin(step, &mut ctx, 1)
    }

    #[test]
    fn test_waits_for_advance() {
        let mut step = make_step();
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        for _ in 0..5 {
            assert!(!run(&mut step, &mut rig, &mut latch));
        }
        assert_eq!(step.status(), "press advance to spin module 1");
        assert!(rig.module_cmds[1].is_none());
    }

    #[test]
    fn test_spin_then_confirm() {
        let mut step = make_step();
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        latch.press_advance();
        assert!(!run(&mut step, &mut rig, &mut latch));
        assert_eq!(rig.module_cmds[1], Some((500, 900)));
        assert_eq!(
            step.status(),
            "verify wheel forward and steer at 90 deg, then advance"
        );

        // Operator watches; nothing changes without the second edge
        assert!(!run(&mut step, &mut rig, &mut latch));
        assert_eq!(rig.module_cmds[1], Some((500, 900)));

        latch.press_advance();
        assert!(run(&mut step, &mut rig, &mut latch));
        assert_eq!(rig.module_cmds[1], Some((0, 0)));
        assert_eq!(step.status(), "module 1 stopped");
    }

    #[test]
    fn test_edge_consumed_by_phase_zero_only() {
        let mut step = make_step();
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        // One press moves exactly one phase, never two
        latch.press_advance();
        assert!(!run(&mut step, &mut rig, &mut latch));
        assert!(!latch.take_advance());
        assert!(!step.complete());
    }
}
