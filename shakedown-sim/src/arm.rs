//! Simulated two-axis arm
//!
//! Each axis integrates its commanded motion one step per update: a
//! closed-loop seek moves toward the target at the axis seek rate, an
//! open-loop output moves proportionally to the commanded permille. The
//! travel switch closes when the axis reaches the bottom of its range, or
//! when the test presses it by hand (the travel-switch checks want an
//! operator's finger, not axis motion).

use shakedown_core::traits::{Arm, ArmAxis};

/// One motorized axis
#[derive(Debug, Clone, Copy)]
pub struct SimAxis {
    position: i32,
    target: Option<i32>,
    output: i16,
    /// Position change per update at full seek
    rate: i32,
    switch_pressed: bool,
    motor_ok: bool,
}

impl SimAxis {
    pub fn new(start_position: i32, rate: i32) -> Self {
        Self {
            position: start_position,
            target: None,
            output: 0,
            rate,
            switch_pressed: false,
            motor_ok: true,
        }
    }

    /// Advance the axis one tick
    pub fn update(&mut self) {
        if let Some(target) = self.target {
            self.position = move_toward(self.position, target, self.rate);
        } else if self.output != 0 {
            self.position += self.output as i32 * self.rate / 1000;
        }
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Stage a position directly
    pub fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    /// Switch closed: pressed by hand or driven onto the low stop
    pub fn at_low_stop(&self) -> bool {
        self.switch_pressed || self.position <= 0
    }

    /// Press or release the travel switch by hand
    pub fn press_switch(&mut self, pressed: bool) {
        self.switch_pressed = pressed;
    }

    /// Stage motor controller connectivity
    pub fn set_motor_ok(&mut self, ok: bool) {
        self.motor_ok = ok;
    }

    fn set_output(&mut self, output: i16) {
        self.output = output;
        if output != 0 {
            self.target = None;
        }
    }

    fn seek(&mut self, target: i32) {
        self.target = Some(target);
        self.output = 0;
    }
}

/// Step `position` toward `target`, landing exactly on it
fn move_toward(position: i32, target: i32, rate: i32) -> i32 {
    let delta = target - position;
    if delta.abs() <= rate {
        target
    } else if delta > 0 {
        position + rate
    } else {
        position - rate
    }
}

/// Default lift start position, somewhere mid-travel
const LIFT_START: i32 = 40;
/// Default extend start position, somewhere mid-travel
const EXTEND_START: i32 = 120;
/// Lift seek rate (ticks per update)
const LIFT_RATE: i32 = 50;
/// Extend seek rate (ticks per update)
const EXTEND_RATE: i32 = 50;

/// Two-axis arm model
#[derive(Debug, Clone, Copy)]
pub struct SimArm {
    pub lift: SimAxis,
    pub extend: SimAxis,
}

impl SimArm {
    /// Both axes mid-travel, switches open, uncalibrated
    pub fn new() -> Self {
        Self {
            lift: SimAxis::new(LIFT_START, LIFT_RATE),
            extend: SimAxis::new(EXTEND_START, EXTEND_RATE),
        }
    }

    /// Advance both axes one tick
    pub fn update(&mut self) {
        self.lift.update();
        self.extend.update();
    }

    pub fn axis(&self, axis: ArmAxis) -> &SimAxis {
        match axis {
            ArmAxis::Lift => &self.lift,
            ArmAxis::Extend => &self.extend,
        }
    }

    pub fn axis_mut(&mut self, axis: ArmAxis) -> &mut SimAxis {
        match axis {
            ArmAxis::Lift => &mut self.lift,
            ArmAxis::Extend => &mut self.extend,
        }
    }
}

impl Default for SimArm {
    fn default() -> Self {
        Self::new()
    }
}

impl Arm for SimArm {
    fn at_low_stop(&self, axis: ArmAxis) -> bool {
        self.axis(axis).at_low_stop()
    }

    fn position(&self, axis: ArmAxis) -> i32 {
        self.axis(axis).position()
    }

    fn set_output(&mut self, axis: ArmAxis, output: i16) {
        self.axis_mut(axis).set_output(output);
    }

    fn seek_position(&mut self, axis: ArmAxis, target: i32) {
        self.axis_mut(axis).seek(target);
    }

    fn zero_encoder(&mut self, axis: ArmAxis) {
        self.axis_mut(axis).position = 0;
    }

    fn motor_ok(&self, axis: ArmAxis) -> bool {
        self.axis(axis).motor_ok
    }
}
