//! Simulated operator consoles
//!
//! The exercise watch works the way the real console wrapper does: once
//! started, every update records which axes are deflected past the
//! activity threshold and which buttons are held, and the exercise is
//! complete when the whole set has been seen at least once.

use shakedown_core::traits::{ArmInput, ConsoleRole, Consoles, DriveInput};

/// Deflection past which an axis counts as exercised (permille)
const AXIS_ACTIVE: i16 = 500;

/// Buttons per console, as a full bitmask
pub const ALL_BUTTONS: u8 = 0b1111;

/// Driver console axes: forward, strafe, rotate
const DRIVER_AXES: u8 = 0b111;
/// Operator console axes: lift, extend
const OPERATOR_AXES: u8 = 0b11;

#[derive(Debug, Clone, Copy, Default)]
struct SeenRecord {
    axes: u8,
    buttons: u8,
}

/// Driver and operator console model
#[derive(Debug, Clone, Copy)]
pub struct SimConsoles {
    drive: DriveInput,
    arm: ArmInput,
    /// Currently held buttons, one mask per console
    buttons: [u8; 2],
    watch: [Option<SeenRecord>; 2],
}

fn role_index(role: ConsoleRole) -> usize {
    match role {
        ConsoleRole::Driver => 0,
        ConsoleRole::Operator => 1,
    }
}

fn required_axes(role: ConsoleRole) -> u8 {
    match role {
        ConsoleRole::Driver => DRIVER_AXES,
        ConsoleRole::Operator => OPERATOR_AXES,
    }
}

fn active(value: i16) -> bool {
    value.unsigned_abs() >= AXIS_ACTIVE as u16
}

impl SimConsoles {
    /// Sticks centered, no buttons held, no exercise running
    pub fn new() -> Self {
        Self {
            drive: DriveInput::default(),
            arm: ArmInput::default(),
            buttons: [0; 2],
            watch: [None; 2],
        }
    }

    /// Record one tick of console activity into any running exercise
    pub fn update(&mut self) {
        let drive = self.drive;
        let arm = self.arm;
        let buttons = self.buttons;

        if let Some(seen) = &mut self.watch[role_index(ConsoleRole::Driver)] {
            if active(drive.forward) {
                seen.axes |= 0b001;
            }
            if active(drive.strafe) {
                seen.axes |= 0b010;
            }
            if active(drive.rotate) {
                seen.axes |= 0b100;
            }
            seen.buttons |= buttons[0];
        }
        if let Some(seen) = &mut self.watch[role_index(ConsoleRole::Operator)] {
            if active(arm.lift) {
                seen.axes |= 0b01;
            }
            if active(arm.extend) {
                seen.axes |= 0b10;
            }
            seen.buttons |= buttons[1];
        }
    }

    /// Stage the driver console sticks
    pub fn set_drive_input(&mut self, input: DriveInput) {
        self.drive = input;
    }

    /// Stage the operator console sticks
    pub fn set_arm_input(&mut self, input: ArmInput) {
        self.arm = input;
    }

    /// Hold down a set of buttons on one console
    pub fn set_buttons(&mut self, role: ConsoleRole, mask: u8) {
        self.buttons[role_index(role)] = mask;
    }
}

impl Default for SimConsoles {
    fn default() -> Self {
        Self::new()
    }
}

impl Consoles for SimConsoles {
    fn exercise_start(&mut self, role: ConsoleRole) {
        self.watch[role_index(role)] = Some(SeenRecord::default());
    }

    fn exercise_complete(&self, role: ConsoleRole) -> bool {
        match self.watch[role_index(role)] {
            Some(seen) => seen.axes == required_axes(role) && seen.buttons == ALL_BUTTONS,
            None => false,
        }
    }

    fn drive_input(&self) -> DriveInput {
        self.drive
    }

    fn arm_input(&self) -> ArmInput {
        self.arm
    }
}
