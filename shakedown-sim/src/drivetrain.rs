//! Simulated drivetrain
//!
//! Records what the engine commanded; there is no chassis kinematics
//! model because no check reads wheel motion back — the operator does.

use shakedown_core::traits::{Drivetrain, ModuleHealth, MODULE_COUNT};

/// Four-module drive base model
#[derive(Debug, Clone, Copy)]
pub struct SimDrivetrain {
    health: [ModuleHealth; MODULE_COUNT as usize],
    /// Last test command per module: (output permille, steer ddeg)
    module_cmd: [Option<(i16, i16)>; MODULE_COUNT as usize],
    last_drive: Option<(i16, i16, i16)>,
}

impl SimDrivetrain {
    /// All modules healthy, nothing commanded
    pub fn new() -> Self {
        let healthy = ModuleHealth {
            drive_motor: true,
            steer_motor: true,
            steer_encoder: true,
        };
        Self {
            health: [healthy; MODULE_COUNT as usize],
            module_cmd: [None; MODULE_COUNT as usize],
            last_drive: None,
        }
    }

    /// Stage the connectivity of one module
    pub fn set_module_health(&mut self, module: u8, health: ModuleHealth) {
        self.health[module as usize] = health;
    }

    /// Last test command issued to a module
    pub fn module_command(&self, module: u8) -> Option<(i16, i16)> {
        self.module_cmd[module as usize]
    }

    /// Last chassis drive command
    pub fn last_drive(&self) -> Option<(i16, i16, i16)> {
        self.last_drive
    }
}

impl Default for SimDrivetrain {
    fn default() -> Self {
        Self::new()
    }
}

impl Drivetrain for SimDrivetrain {
    fn module_health(&self, module: u8) -> ModuleHealth {
        self.health[module as usize]
    }

    fn test_module(&mut self, module: u8, output: i16, angle_ddeg: i16) {
        self.module_cmd[module as usize] = Some((output, angle_ddeg));
    }

    fn drive(&mut self, forward: i16, strafe: i16, rotate: i16) {
        self.last_drive = Some((forward, strafe, rotate));
    }
}
