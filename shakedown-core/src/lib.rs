//! Board-agnostic checklist sequencing engine
//!
//! This crate contains all commissioning-checklist logic that does not
//! depend on specific hardware implementations:
//!
//! - Hardware capability traits (drivetrain, arm, gyro, pneumatics, power,
//!   consoles)
//! - The step model and the standard step catalog
//! - The sequencer (cursor, reset/skip handling, completion aggregation)
//! - Per-subsystem step state machines
//! - Operator signal latch (read-and-clear edge controls)
//! - Status reporting to the dashboard link
//! - Teleop pass-through math
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod checklist;
pub mod checks;
pub mod config;
pub mod report;
pub mod signals;
pub mod teleop;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;
