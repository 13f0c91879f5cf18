//! Frame encoding and decoding for the dashboard link.
//!
//! Frame layout:
//! - SYNC (1 byte): 0xC3 synchronization byte
//! - LENGTH (1 byte): payload length (0-128)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-128 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, TYPE, and all PAYLOAD bytes
//!
//! The decoder consumes one byte at a time and resynchronizes on the SYNC
//! byte after garbage or a checksum failure.

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_SYNC: u8 = 0xC3;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_LEN: usize = 128;

/// Maximum complete frame size (SYNC + LENGTH + TYPE + payload + CHECKSUM)
pub const MAX_FRAME_LEN: usize = 1 + 1 + 1 + MAX_PAYLOAD_LEN + 1;

/// Errors that can occur while encoding or decoding frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds the maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    BadChecksum,
    /// Declared length exceeds the payload bound
    BadLength,
    /// Frame payload does not match its declared message type
    Malformed,
    /// Output buffer too small for the encoded frame
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub kind: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl Frame {
    /// Create a new frame with the given message type and payload
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { kind, payload: buf })
    }

    /// Create a frame with no payload
    pub fn empty(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    /// Checksum over everything after the sync byte
    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ kind, |acc, &b| acc ^ b)
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, FrameError> {
        let total = 4 + self.payload.len();
        if out.len() < total {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        out[0] = FRAME_SYNC;
        out[1] = length;
        out[2] = self.kind;
        out[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        out[3 + self.payload.len()] = Self::checksum(length, self.kind, &self.payload);

        Ok(total)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Vec<u8, MAX_FRAME_LEN> {
        let mut out = Vec::new();
        let length = self.payload.len() as u8;
        // MAX_FRAME_LEN covers the largest possible payload, so pushes
        // cannot fail here
        let _ = out.push(FRAME_SYNC);
        let _ = out.push(length);
        let _ = out.push(self.kind);
        let _ = out.extend_from_slice(&self.payload);
        let _ = out.push(Self::checksum(length, self.kind, &self.payload));
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Hunting for the SYNC byte
    Sync,
    /// Expecting the LENGTH byte
    Length,
    /// Expecting the TYPE byte
    Kind,
    /// Collecting payload bytes
    Payload,
    /// Expecting the CHECKSUM byte
    Checksum,
}

/// Incremental decoder for incoming frames
///
/// Feed received bytes one at a time with [`FrameDecoder::push`]. Bytes
/// that arrive outside a frame are discarded until the next SYNC byte.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecodeState,
    pending: Vec<u8, MAX_PAYLOAD_LEN>,
    want: u8,
    kind: u8,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {
            state: DecodeState::Sync,
            pending: Vec::new(),
            want: 0,
            kind: 0,
        }
    }

    /// Drop any partial frame and hunt for the next SYNC byte
    pub fn reset(&mut self) {
        self.state = DecodeState::Sync;
        self.pending.clear();
        self.want = 0;
        self.kind = 0;
    }

    /// Consume one received byte
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame has been
    /// assembled, `Ok(None)` while more bytes are needed, or `Err` on a
    /// framing error (the decoder resynchronizes automatically).
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            DecodeState::Sync => {
                if byte == FRAME_SYNC {
                    self.state = DecodeState::Length;
                }
                Ok(None)
            }
            DecodeState::Length => {
                if byte as usize > MAX_PAYLOAD_LEN {
                    self.reset();
                    return Err(FrameError::BadLength);
                }
                self.want = byte;
                self.state = DecodeState::Kind;
                Ok(None)
            }
            DecodeState::Kind => {
                self.kind = byte;
                self.pending.clear();
                self.state = if self.want == 0 {
                    DecodeState::Checksum
                } else {
                    DecodeState::Payload
                };
                Ok(None)
            }
            DecodeState::Payload => {
                // Cannot overflow: want is bounded by MAX_PAYLOAD_LEN
                let _ = self.pending.push(byte);
                if self.pending.len() == self.want as usize {
                    self.state = DecodeState::Checksum;
                }
                Ok(None)
            }
            DecodeState::Checksum => {
                let expected = Frame::checksum(self.want, self.kind, &self.pending);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::BadChecksum);
                }

                let frame = Frame {
                    kind: self.kind,
                    payload: self.pending.clone(),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Consume a slice of received bytes
    ///
    /// Returns the first complete frame found, if any. Bytes after the
    /// first complete frame are not consumed.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.push(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
