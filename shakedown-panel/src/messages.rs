//! Message types for the dashboard link
//!
//! Message types are divided into two categories:
//! - Panel → Rig controller: operator commands, heartbeat requests
//! - Rig controller → Panel: step registration, step results, the current
//!   step feed, heartbeat responses

use crate::events::PanelCommand;
use crate::frame::{Frame, FrameError, MAX_PAYLOAD_LEN};
use heapless::Vec;

// Message type IDs: Panel -> Rig
pub const MSG_COMMAND: u8 = 0x01;
pub const MSG_PING: u8 = 0x02;

// Message type IDs: Rig -> Panel
pub const MSG_REGISTER: u8 = 0x20;
pub const MSG_RESULT: u8 = 0x21;
pub const MSG_PUBLISH: u8 = 0x22;
pub const MSG_CLEAR: u8 = 0x23;
pub const MSG_PONG: u8 = 0x24;

/// Messages from the rig controller to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RigMessage<'a> {
    /// Announce a checklist step tile
    ///
    /// `group` 0 marks a main step; sub-steps carry their display column.
    Register { ordinal: u8, group: u8, title: &'a str },
    /// Latest pass/fail state of a step tile
    Result { ordinal: u8, passed: bool },
    /// Current step title and status line
    Publish { title: &'a str, status: &'a str },
    /// Reset the panel to its blank state
    Clear,
    /// Heartbeat response
    Pong,
}

impl<'a> RigMessage<'a> {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            RigMessage::Register { ordinal, group, title } => {
                // Payload: [ordinal][group][len][chars...]
                let mut payload = Vec::<u8, MAX_PAYLOAD_LEN>::new();
                payload.push(*ordinal).map_err(|_| FrameError::PayloadTooLarge)?;
                payload.push(*group).map_err(|_| FrameError::PayloadTooLarge)?;
                push_str(&mut payload, title)?;
                Frame::new(MSG_REGISTER, &payload)
            }
            RigMessage::Result { ordinal, passed } => {
                Frame::new(MSG_RESULT, &[*ordinal, *passed as u8])
            }
            RigMessage::Publish { title, status } => {
                // Payload: [len][chars...][len][chars...]
                let mut payload = Vec::<u8, MAX_PAYLOAD_LEN>::new();
                push_str(&mut payload, title)?;
                push_str(&mut payload, status)?;
                Frame::new(MSG_PUBLISH, &payload)
            }
            RigMessage::Clear => Ok(Frame::empty(MSG_CLEAR)),
            RigMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }

    /// Parse a rig message from a received frame (panel side)
    pub fn from_frame(frame: &'a Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_REGISTER => {
                let (&ordinal, rest) =
                    frame.payload.split_first().ok_or(FrameError::Malformed)?;
                let (&group, rest) = rest.split_first().ok_or(FrameError::Malformed)?;
                let (title, rest) = take_str(rest)?;
                if !rest.is_empty() {
                    return Err(FrameError::Malformed);
                }
                Ok(RigMessage::Register { ordinal, group, title })
            }
            MSG_RESULT => match frame.payload[..] {
                [ordinal, passed] => Ok(RigMessage::Result {
                    ordinal,
                    passed: passed != 0,
                }),
                _ => Err(FrameError::Malformed),
            },
            MSG_PUBLISH => {
                let (title, rest) = take_str(&frame.payload)?;
                let (status, rest) = take_str(rest)?;
                if !rest.is_empty() {
                    return Err(FrameError::Malformed);
                }
                Ok(RigMessage::Publish { title, status })
            }
            MSG_CLEAR => Ok(RigMessage::Clear),
            MSG_PONG => Ok(RigMessage::Pong),
            _ => Err(FrameError::Malformed),
        }
    }
}

/// Messages from the panel to the rig controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelMessage {
    /// Operator command (button press or toggle)
    Command(PanelCommand),
    /// Heartbeat request
    Ping,
}

impl PanelMessage {
    /// Parse a panel message from a received frame (controller side)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_COMMAND => match frame.payload[..] {
                [byte] => PanelCommand::from_byte(byte)
                    .map(PanelMessage::Command)
                    .ok_or(FrameError::Malformed),
                _ => Err(FrameError::Malformed),
            },
            MSG_PING => Ok(PanelMessage::Ping),
            _ => Err(FrameError::Malformed),
        }
    }

    /// Encode this message into a frame (panel side, or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelMessage::Command(cmd) => Frame::new(MSG_COMMAND, &[cmd.to_byte()]),
            PanelMessage::Ping => Ok(Frame::empty(MSG_PING)),
        }
    }
}

/// Append a length-prefixed string to a payload
fn push_str(payload: &mut Vec<u8, MAX_PAYLOAD_LEN>, text: &str) -> Result<(), FrameError> {
    let bytes = text.as_bytes();
    if bytes.len() > u8::MAX as usize {
        return Err(FrameError::PayloadTooLarge);
    }
    payload
        .push(bytes.len() as u8)
        .map_err(|_| FrameError::PayloadTooLarge)?;
    payload
        .extend_from_slice(bytes)
        .map_err(|_| FrameError::PayloadTooLarge)?;
    Ok(())
}

/// Split a length-prefixed string off the front of a payload
fn take_str(bytes: &[u8]) -> Result<(&str, &[u8]), FrameError> {
    let (&len, rest) = bytes.split_first().ok_or(FrameError::Malformed)?;
    if rest.len() < len as usize {
        return Err(FrameError::Malformed);
    }
    let (text, rest) = rest.split_at(len as usize);
    let text = core::str::from_utf8(text).map_err(|_| FrameError::Malformed)?;
    Ok((text, rest))
}
