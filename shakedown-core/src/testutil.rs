//! Manual test double for the hardware capability set
//!
//! [`BenchRig`] records every command and serves readings straight from
//! public fields, so a test can stage any hardware situation by assignment
//! and inspect exactly what the engine commanded. No motion model; the
//! simulated rig in `shakedown-sim` covers that.

use crate::traits::{
    Arm, ArmAxis, ArmInput, ConsoleRole, Consoles, DriveInput, Drivetrain, Gyro, ModuleHealth,
    Pneumatics, PowerHub, MODULE_COUNT,
};

/// Bench-top rig double; all state is public for staging and inspection
pub(crate) struct BenchRig {
    // Power hub
    pub battery_mv: u16,
    pub power_fault: bool,

    // Drivetrain
    pub modules: [ModuleHealth; MODULE_COUNT as usize],
    /// Last test command per module: (output permille, steer ddeg)
    pub module_cmds: [Option<(i16, i16)>; MODULE_COUNT as usize],
    /// Last chassis drive command: (forward, strafe, rotate)
    pub last_drive: Option<(i16, i16, i16)>,

    // Gyro
    pub gyro_connected: bool,
    pub yaw_ddeg: i16,
    pub pitch_ddeg: i16,
    pub heading_resets: u8,

    // Arm
    pub lift_pos: i32,
    pub extend_pos: i32,
    pub lift_low_stop: bool,
    pub extend_low_stop: bool,
    pub lift_output: i16,
    pub extend_output: i16,
    pub lift_target: Option<i32>,
    pub extend_target: Option<i32>,
    pub lift_motor_ok: bool,
    pub extend_motor_ok: bool,

    // Pneumatics
    pub compressor_on: bool,
    pub pressure_low: bool,
    pub grip_closed: bool,
    pub grip_commands: u8,
    pub pneumatic_fault: bool,

    // Consoles
    pub drive_sticks: DriveInput,
    pub arm_sticks: ArmInput,
    pub exercise_active: [bool; 2],
    pub exercise_done: [bool; 2],
}

impl BenchRig {
    /// A healthy rig: good battery, every device responding, switches
    /// open, tank empty, sticks centered
    pub fn new() -> Self {
        let healthy = ModuleHealth {
            drive_motor: true,
            steer_motor: true,
            steer_encoder: true,
        };
        Self {
            battery_mv: 12_600,
            power_fault: false,
            modules: [healthy; MODULE_COUNT as usize],
            module_cmds: [None; MODULE_COUNT as usize],
            last_drive: None,
            gyro_connected: true,
            yaw_ddeg: 0,
            pitch_ddeg: 0,
            heading_resets: 0,
            lift_pos: 0,
            extend_pos: 0,
            lift_low_stop: false,
            extend_low_stop: false,
            lift_output: 0,
            extend_output: 0,
            lift_target: None,
            extend_target: None,
            lift_motor_ok: true,
            extend_motor_ok: true,
            compressor_on: true,
            pressure_low: true,
            grip_closed: false,
            grip_commands: 0,
            pneumatic_fault: false,
            drive_sticks: DriveInput::default(),
            arm_sticks: ArmInput::default(),
            exercise_active: [false; 2],
            exercise_done: [false; 2],
        }
    }
}

fn role_index(role: ConsoleRole) -> usize {
    match role {
        ConsoleRole::Driver => 0,
        ConsoleRole::Operator => 1,
    }
}

impl PowerHub for BenchRig {
    fn battery_mv(&self) -> u16 {
        self.battery_mv
    }

    fn power_fault(&self) -> bool {
        self.power_fault
    }
}

impl Drivetrain for BenchRig {
    fn module_health(&self, module: u8) -> ModuleHealth {
        self.modules[module as usize]
    }

    fn test_module(&mut self, module: u8, output: i16, angle_ddeg: i16) {
        self.module_cmds[module as usize] = Some((output, angle_ddeg));
    }

    fn drive(&mut self, forward: i16, strafe: i16, rotate: i16) {
        self.last_drive = Some((forward, strafe, rotate));
    }
}

impl Gyro for BenchRig {
    fn connected(&self) -> bool {
        self.gyro_connected
    }

    fn reset_heading(&mut self) {
        self.yaw_ddeg = 0;
        self.pitch_ddeg = 0;
        self.heading_resets += 1;
    }

    fn yaw_ddeg(&self) -> i16 {
        self.yaw_ddeg
    }

    fn pitch_ddeg(&self) -> i16 {
        self.pitch_ddeg
    }
}

impl Arm for BenchRig {
    fn at_low_stop(&self, axis: ArmAxis) -> bool {
        match axis {
            ArmAxis::Lift => self.lift_low_stop,
            ArmAxis::Extend => self.extend_low_stop,
        }
    }

    fn position(&self, axis: ArmAxis) -> i32 {
        match axis {
            ArmAxis::Lift => self.lift_pos,
            ArmAxis::Extend => self.extend_pos,
        }
    }

    fn set_output(&mut self, axis: ArmAxis, output: i16) {
        match axis {
            ArmAxis::Lift => self.lift_output = output,
            ArmAxis::Extend => self.extend_output = output,
        }
    }

    fn seek_position(&mut self, axis: ArmAxis, target: i32) {
        match axis {
            ArmAxis::Lift => self.lift_target = Some(target),
            ArmAxis::Extend => self.extend_target = Some(target),
        }
    }

    fn zero_encoder(&mut self, axis: ArmAxis) {
        match axis {
            ArmAxis::Lift => self.lift_pos = 0,
            ArmAxis::Extend => self.extend_pos = 0,
        }
    }

    fn motor_ok(&self, axis: ArmAxis) -> bool {
        match axis {
            ArmAxis::Lift => self.lift_motor_ok,
            ArmAxis::Extend => self.extend_motor_ok,
        }
    }
}

impl Pneumatics for BenchRig {
    fn enable_compressor(&mut self) {
        self.compressor_on = true;
    }

    fn disable_compressor(&mut self) {
        self.compressor_on = false;
    }

    fn pressure_low(&self) -> bool {
        self.pressure_low
    }

    fn grip_close(&mut self) {
        self.grip_closed = true;
        self.grip_commands += 1;
    }

    fn grip_open(&mut self) {
        self.grip_closed = false;
        self.grip_commands += 1;
    }

    fn pneumatic_fault(&self) -> bool {
        self.pneumatic_fault
    }
}

impl Consoles for BenchRig {
    fn exercise_start(&mut self, role: ConsoleRole) {
        self.exercise_active[role_index(role)] = true;
    }

    fn exercise_complete(&self, role: ConsoleRole) -> bool {
        self.exercise_done[role_index(role)]
    }

    fn drive_input(&self) -> DriveInput {
        self.drive_sticks
    }

    fn arm_input(&self) -> ArmInput {
        self.arm_sticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_rig_defaults_pass_static_checks() {
        let rig = BenchRig::new();
        assert!(rig.battery_mv() >= 12_000);
        assert!(rig.connected());
        for module in 0..MODULE_COUNT {
            assert!(rig.module_health(module).all_present());
        }
        assert!(!rig.power_fault());
        assert!(!rig.pneumatic_fault());
    }

    #[test]
    fn test_zero_encoder_clears_position() {
        let mut rig = BenchRig::new();
        rig.lift_pos = 440;
        rig.zero_encoder(ArmAxis::Lift);
        assert_eq!(rig.position(ArmAxis::Lift), 0);
    }

    #[test]
    fn test_exercise_bookkeeping() {
        let mut rig = BenchRig::new();
        assert!(!rig.exercise_complete(ConsoleRole::Driver));
        rig.exercise_start(ConsoleRole::Driver);
        assert!(rig.exercise_active[0]);
        rig.exercise_done[0] = true;
        assert!(rig.exercise_complete(ConsoleRole::Driver));
        assert!(!rig.exercise_complete(ConsoleRole::Operator));
    }
}
