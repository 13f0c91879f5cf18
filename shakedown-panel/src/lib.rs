//! Dashboard link protocol for the Shakedown checklist engine
//!
//! This crate defines the serial protocol between the robot controller and
//! the operator's dashboard panel. The panel acts as a dumb terminal: it
//! renders step tiles and status text, and reports button presses. All
//! checklist logic stays on the controller.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌──────┬────────┬──────┬────────────┬──────────┐
//! │ SYNC │ LENGTH │ TYPE │ PAYLOAD    │ CHECKSUM │
//! │ 1B   │ 1B     │ 1B   │ 0–128B     │ 1B       │
//! └──────┴────────┴──────┴────────────┴──────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod frame;
pub mod messages;

pub use events::PanelCommand;
pub use frame::{Frame, FrameDecoder, FrameError, FRAME_SYNC, MAX_PAYLOAD_LEN};
pub use messages::{PanelMessage, RigMessage};
