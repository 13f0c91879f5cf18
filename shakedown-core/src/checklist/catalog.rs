//! The standard commissioning checklist
//!
//! Declarative table of the 26 steps, in run order. Sub-steps carry the
//! display column of their group; main steps sit in column 0 and aggregate
//! their sub-steps by identifier.

use super::sequencer::{BuildError, Checklist, StepSpec};
use super::step::{CheckKind, StepId};
use crate::config::ChecklistConfig;
use crate::traits::{ArmAxis, ConsoleRole, GyroAxis};

const MODULE_GROUP: &[StepId] = &[
    StepId::Module0,
    StepId::Module1,
    StepId::Module2,
    StepId::Module3,
];
const GYRO_GROUP: &[StepId] = &[StepId::GyroYaw, StepId::GyroPitch];
const SWITCH_GROUP: &[StepId] = &[StepId::ExtendSwitch, StepId::LiftSwitch];
const ARM_GROUP: &[StepId] = &[StepId::ArmMaxLift, StepId::ArmMaxExtend, StepId::ArmZero];
const PNEUMATICS_GROUP: &[StepId] = &[
    StepId::Compressor,
    StepId::LeakCheck,
    StepId::GripperCycle,
];
const CONSOLE_GROUP: &[StepId] = &[StepId::DriverConsole, StepId::OperatorConsole];

/// The standard step table, in run order
pub const STANDARD_STEPS: &[StepSpec] = &[
    StepSpec {
        id: StepId::Battery,
        title: "1. Battery",
        group: 0,
        check: CheckKind::Battery,
    },
    StepSpec {
        id: StepId::DeviceScan,
        title: "2. Device Scan",
        group: 0,
        check: CheckKind::DeviceScan,
    },
    StepSpec {
        id: StepId::Module0,
        title: "3a. Module 0",
        group: 2,
        check: CheckKind::DriveModule(0),
    },
    StepSpec {
        id: StepId::Module1,
        title: "3b. Module 1",
        group: 4,
        check: CheckKind::DriveModule(1),
    },
    StepSpec {
        id: StepId::Module2,
        title: "3c. Module 2",
        group: 6,
        check: CheckKind::DriveModule(2),
    },
    StepSpec {
        id: StepId::Module3,
        title: "3d. Module 3",
        group: 8,
        check: CheckKind::DriveModule(3),
    },
    StepSpec {
        id: StepId::Modules,
        title: "3. Drive Modules",
        group: 0,
        check: CheckKind::Aggregate(MODULE_GROUP),
    },
    StepSpec {
        id: StepId::GyroYaw,
        title: "4a. Yaw",
        group: 2,
        check: CheckKind::GyroAxis(GyroAxis::Yaw),
    },
    StepSpec {
        id: StepId::GyroPitch,
        title: "4b. Pitch",
        group: 4,
        check: CheckKind::GyroAxis(GyroAxis::Pitch),
    },
    StepSpec {
        id: StepId::Gyro,
        title: "4. Gyro",
        group: 0,
        check: CheckKind::Aggregate(GYRO_GROUP),
    },
    StepSpec {
        id: StepId::ExtendSwitch,
        title: "5a. Extend Switch",
        group: 2,
        check: CheckKind::TravelSwitch(ArmAxis::Extend),
    },
    StepSpec {
        id: StepId::LiftSwitch,
        title: "5b. Lift Switch",
        group: 4,
        check: CheckKind::TravelSwitch(ArmAxis::Lift),
    },
    StepSpec {
        id: StepId::TravelSwitches,
        title: "5. Travel Switches",
        group: 0,
        check: CheckKind::Aggregate(SWITCH_GROUP),
    },
    StepSpec {
        id: StepId::ArmCalibrate,
        title: "6a. Calibrate",
        group: 2,
        check: CheckKind::ArmCalibrate,
    },
    StepSpec {
        id: StepId::ArmMaxLift,
        title: "6b. Lift to Max",
        group: 4,
        check: CheckKind::ArmToMax(ArmAxis::Lift),
    },
    StepSpec {
        id: StepId::ArmMaxExtend,
        title: "6c. Extend to Max",
        group: 6,
        check: CheckKind::ArmToMax(ArmAxis::Extend),
    },
    StepSpec {
        id: StepId::ArmZero,
        title: "6d. Return to Zero",
        group: 8,
        check: CheckKind::ArmToZero,
    },
    StepSpec {
        id: StepId::Arm,
        title: "6. Arm",
        group: 0,
        check: CheckKind::Aggregate(ARM_GROUP),
    },
    StepSpec {
        id: StepId::Compressor,
        title: "7a. Compressor",
        group: 2,
        check: CheckKind::Compressor,
    },
    StepSpec {
        id: StepId::LeakCheck,
        title: "7b. Leak Check",
        group: 4,
        check: CheckKind::LeakCheck,
    },
    StepSpec {
        id: StepId::GripperCycle,
        title: "7c. Gripper Cycle",
        group: 6,
        check: CheckKind::GripperCycle,
    },
    StepSpec {
        id: StepId::Pneumatics,
        title: "7. Pneumatics",
        group: 0,
        check: CheckKind::Aggregate(PNEUMATICS_GROUP),
    },
    StepSpec {
        id: StepId::DriverConsole,
        title: "8a. Driver Console",
        group: 2,
        check: CheckKind::Console(ConsoleRole::Driver),
    },
    StepSpec {
        id: StepId::OperatorConsole,
        title: "8b. Operator Console",
        group: 4,
        check: CheckKind::Console(ConsoleRole::Operator),
    },
    StepSpec {
        id: StepId::Consoles,
        title: "8. Consoles",
        group: 0,
        check: CheckKind::Aggregate(CONSOLE_GROUP),
    },
    StepSpec {
        id: StepId::AllComplete,
        title: "Tests Complete",
        group: 0,
        check: CheckKind::AllComplete,
    },
];

/// Build the standard checklist with default thresholds
pub fn standard_checklist() -> Result<Checklist, BuildError> {
    Checklist::build(STANDARD_STEPS, ChecklistConfig::default())
}

/// Build the standard checklist with the given thresholds
pub fn standard_checklist_with(config: ChecklistConfig) -> Result<Checklist, BuildError> {
    Checklist::build(STANDARD_STEPS, config)
}

/// Fixed status line for an aggregate step
pub(crate) fn group_status(id: StepId) -> &'static str {
    match id {
        StepId::Modules => "module checks complete",
        StepId::Gyro => "gyro checks complete",
        StepId::TravelSwitches => "travel switch checks complete",
        StepId::Arm => "arm checks complete",
        StepId::Pneumatics => "pneumatic checks complete",
        StepId::Consoles => "console checks complete",
        StepId::AllComplete => "all checks complete",
        _ => "group complete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_checklist_builds() {
        let checklist = standard_checklist().unwrap();
        assert_eq!(checklist.len(), 26);
    }

    #[test]
    fn test_terminal_is_last() {
        let last = STANDARD_STEPS.last().unwrap();
        assert_eq!(last.id, StepId::AllComplete);
        assert!(matches!(last.check, CheckKind::AllComplete));
    }

    #[test]
    fn test_aggregates_follow_their_children() {
        // Every aggregate must appear after all of its children so a skip
        // from a sub-step lands one past the group boundary
        for (i, spec) in STANDARD_STEPS.iter().enumerate() {
            if let CheckKind::Aggregate(children) = spec.check {
                for child in children {
                    let child_pos = STANDARD_STEPS
                        .iter()
                        .position(|s| s.id == *child)
                        .unwrap();
                    assert!(child_pos < i, "{:?} after its aggregate", child);
                }
            }
        }
    }

    #[test]
    fn test_main_steps_are_group_zero() {
        for spec in STANDARD_STEPS {
            let aggregate = spec.check.is_aggregate();
            let leaf_main =
                matches!(spec.id, StepId::Battery | StepId::DeviceScan);
            if aggregate || leaf_main {
                assert_eq!(spec.group, 0, "{:?} should be a main step", spec.id);
            }
        }
    }

    #[test]
    fn test_titles_fit_the_panel() {
        use super::super::MAX_TITLE_LEN;
        for spec in STANDARD_STEPS {
            assert!(spec.title.len() <= MAX_TITLE_LEN, "{}", spec.title);
        }
    }
}
