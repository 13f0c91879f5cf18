//! Simulated rig for the Shakedown checklist engine
//!
//! Integer models of every hardware capability the checklist runs
//! against: battery and bus health, drive modules, gyro, the two-axis arm
//! with travel switches, pneumatics with a filling tank, and the operator
//! consoles. Each model advances one tick per [`SimRig::update`] call, so
//! a test interleaves `rig.update()` with `checklist.tick(...)` exactly
//! the way the firmware loop interleaves hardware I/O with the engine.
//!
//! Nothing here talks to real devices; the point is to run the whole
//! checklist end to end on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod arm;
pub mod console;
pub mod drivetrain;
pub mod gyro;
pub mod pneumatics;
pub mod power;
pub mod rig;

pub use rig::SimRig;
