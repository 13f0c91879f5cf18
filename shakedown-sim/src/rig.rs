//! The composed simulated rig

use shakedown_core::traits::{
    Arm, ArmAxis, ArmInput, ConsoleRole, Consoles, DriveInput, Drivetrain, Gyro, ModuleHealth,
    Pneumatics, PowerHub,
};

use crate::arm::SimArm;
use crate::console::SimConsoles;
use crate::drivetrain::SimDrivetrain;
use crate::gyro::SimGyro;
use crate::pneumatics::SimPneumatics;
use crate::power::SimPower;

/// Every capability the checklist runs against, backed by the sim models
///
/// Tests reach into the public subsystems to stage readings and press
/// switches; the engine only ever sees the capability traits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimRig {
    pub power: SimPower,
    pub drivetrain: SimDrivetrain,
    pub gyro: SimGyro,
    pub arm: SimArm,
    pub pneumatics: SimPneumatics,
    pub consoles: SimConsoles,
}

impl SimRig {
    /// A healthy rig, ready for a full checklist run
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every model one tick
    ///
    /// Call once per scheduler cycle, before the checklist tick, the way
    /// the firmware loop samples hardware before running the engine.
    pub fn update(&mut self) {
        self.arm.update();
        self.pneumatics.update();
        self.consoles.update();
    }
}

impl PowerHub for SimRig {
    fn battery_mv(&self) -> u16 {
        self.power.battery_mv()
    }

    fn power_fault(&self) -> bool {
        self.power.power_fault()
    }
}

impl Drivetrain for SimRig {
    fn module_health(&self, module: u8) -> ModuleHealth {
        self.drivetrain.module_health(module)
    }

    fn test_module(&mut self, module: u8, output: i16, angle_ddeg: i16) {
        self.drivetrain.test_module(module, output, angle_ddeg);
    }

    fn drive(&mut self, forward: i16, strafe: i16, rotate: i16) {
        self.drivetrain.drive(forward, strafe, rotate);
    }
}

impl Gyro for SimRig {
    fn connected(&self) -> bool {
        self.gyro.connected()
    }

    fn reset_heading(&mut self) {
        self.gyro.reset_heading();
    }

    fn yaw_ddeg(&self) -> i16 {
        self.gyro.yaw_ddeg()
    }

    fn pitch_ddeg(&self) -> i16 {
        self.gyro.pitch_ddeg()
    }
}

impl Arm for SimRig {
    fn at_low_stop(&self, axis: ArmAxis) -> bool {
        self.arm.at_low_stop(axis)
    }

    fn position(&self, axis: ArmAxis) -> i32 {
        self.arm.position(axis)
    }

    fn set_output(&mut self, axis: ArmAxis, output: i16) {
        self.arm.set_output(axis, output);
    }

    fn seek_position(&mut self, axis: ArmAxis, target: i32) {
        self.arm.seek_position(axis, target);
    }

    fn zero_encoder(&mut self, axis: ArmAxis) {
        self.arm.zero_encoder(axis);
    }

    fn motor_ok(&self, axis: ArmAxis) -> bool {
        self.arm.motor_ok(axis)
    }
}

impl Pneumatics for SimRig {
    fn enable_compressor(&mut self) {
        self.pneumatics.enable_compressor();
    }

    fn disable_compressor(&mut self) {
        self.pneumatics.disable_compressor();
    }

    fn pressure_low(&self) -> bool {
        self.pneumatics.pressure_low()
    }

    fn grip_close(&mut self) {
        self.pneumatics.grip_close();
    }

    fn grip_open(&mut self) {
        self.pneumatics.grip_open();
    }

    fn pneumatic_fault(&self) -> bool {
        self.pneumatics.pneumatic_fault()
    }
}

impl Consoles for SimRig {
    fn exercise_start(&mut self, role: ConsoleRole) {
        self.consoles.exercise_start(role);
    }

    fn exercise_complete(&self, role: ConsoleRole) -> bool {
        self.consoles.exercise_complete(role)
    }

    fn drive_input(&self) -> DriveInput {
        self.consoles.drive_input()
    }

    fn arm_input(&self) -> ArmInput {
        self.consoles.arm_input()
    }
}
