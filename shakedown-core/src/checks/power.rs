//! Battery and device-scan checks

use core::fmt::Write;

use heapless::String;

use super::CheckContext;
use crate::checklist::{Step, MAX_STATUS_LEN};
use crate::traits::{ArmAxis, MODULE_COUNT};

/// Battery voltage against the configured minimum
///
/// No phases; the status always shows the live reading next to the
/// threshold, and completion latches as soon as the reading is high
/// enough.
pub(crate) fn battery(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    let mv = ctx.rig.battery_mv();
    let min = ctx.config.battery_min_mv;
    step.set_status_fmt(format_args!("{} mV | {} mV", mv, min));

    if mv >= min {
        step.mark_complete();
    }
    step.complete()
}

/// Bus connectivity scan across every device
///
/// Lists whatever is missing in the status line; completion latches the
/// first time the whole rig responds.
pub(crate) fn device_scan(step: &mut Step, ctx: &mut CheckContext<'_>) -> bool {
    let mut missing: String<MAX_STATUS_LEN> = String::new();

    for module in 0..MODULE_COUNT {
        let health = ctx.rig.module_health(module);
        if !health.drive_motor {
            let _ = write!(missing, " mod{} drive", module);
        }
        if !health.steer_motor {
            let _ = write!(missing, " mod{} steer", module);
        }
        if !health.steer_encoder {
            let _ = write!(missing, " mod{} encoder", module);
        }
    }
    if !ctx.rig.connected() {
        let _ = missing.push_str(" gyro");
    }
    if ctx.rig.pneumatic_fault() {
        let _ = missing.push_str(" pneumatic hub");
    }
    if ctx.rig.power_fault() {
        let _ = missing.push_str(" power hub");
    }
    if !ctx.rig.motor_ok(ArmAxis::Lift) {
        let _ = missing.push_str(" lift motor");
    }
    if !ctx.rig.motor_ok(ArmAxis::Extend) {
        let _ = missing.push_str(" extend motor");
    }

    if missing.is_empty() {
        step.set_status("all devices responding");
        step.mark_complete();
    } else {
        step.set_status_fmt(format_args!("missing:{}", missing));
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

    fn run_check(
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
    fn test_battery_below_threshold() {
        let mut step = Step::new(StepId::Battery, "1. Battery", 0, CheckKind::Battery);
        let mut rig = BenchRig::new();
        rig.battery_mv = 11_900;
        let mut latch = SignalLatch::new();

        assert!(!run_check(&mut step, &mut rig, &mut latch, battery));
        assert_eq!(step.status(), "11900 mV | 12000 mV");
    }

    #[test]
    fn test_battery_latches_complete()  {
        let mut step = Step::new(StepId::Battery, "1. Battery", 0, CheckKind::Battery);
        let mut rig = BenchRig::new();
        rig.battery_mv = 12_650;
        let mut latch = SignalLatch::new();

        assert!(run_check(&mut step, &mut rig, &mut latch, battery));

        // A later sag does not clear the pass
        rig.battery_mv = 11_000;
        assert!(run_check(&mut step, &mut rig, &mut latch, battery));
        assert_eq!(step.status(), "11000 mV | 12000 mV");
    }

    #[test]
    fn test_device_scan_all_present() {
        let mut step = Step::new(StepId::DeviceScan, "2. Device Scan", 0, CheckKind::DeviceScan);
        let mut rig = BenchRig::new();
        let mut latch = SignalLatch::new();

        assert!(run_check(&mut step, &mut rig, &mut latch, device_scan));
        assert_eq!(step.status(), "all devices responding");
    }

    #[test]
    fn test_device_scan_lists_missing() {
        let mut step = Step::new(StepId::DeviceScan, "2. Device Scan", 0, CheckKind::DeviceScan);
        let mut rig = BenchRig::new();
        rig.modules[2].steer_encoder = false;
        rig.gyro_connected = false;
        rig.lift_motor_ok = false;
        let mut latch = SignalLatch::new();

        assert!(!run_check(&mut step, &mut rig, &mut latch, device_scan));
        assert_eq!(step.status(), "missing: mod2 encoder gyro lift motor");
    }

    #[test]
    fn test_device_scan_recovers() {
        let mut step = Step::new(StepId::DeviceScan, "2. Device Scan", 0, CheckKind::DeviceScan);
        let mut rig = BenchRig::new();
        rig.power_fault = true;
        let mut latch = SignalLatch::new();

        assert!(!run_check(&mut step, &mut rig, &mut latch, device_scan));
        assert_eq!(step.status(), "missing: power hub");

        rig.power_fault = false;
        assert!(run_check(&mut step, &mut rig, &mut latch, device_scan));
    }
}
