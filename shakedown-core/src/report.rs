//! Status reporting
//!
//! The sequencer pushes three kinds of feed data: step registration at
//! init time, a pass/fail flag per step after every evaluation, and the
//! current step's title/status once per tick. [`StatusSink`] carries that
//! contract; [`PanelReporter`] encodes it onto the dashboard link with
//! change suppression so an idle checklist does not saturate the wire.

use heapless::{String, Vec};
use shakedown_panel::{Frame, RigMessage};

use crate::checklist::{MAX_STATUS_LEN, MAX_STEPS, MAX_TITLE_LEN};

/// Receiver for the checklist status feed
pub trait StatusSink {
    /// Announce a step tile (called once per step at init time)
    fn register_step(&mut self, ordinal: u8, group: u8, title: &str);

    /// Latest pass/fail state of a step
    fn set_complete(&mut self, ordinal: u8, complete: bool);

    /// Current step title and status line (called once per tick)
    fn publish(&mut self, title: &str, status: &str);
}

/// Sink that discards the feed
///
/// For tests and rigs that run headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn register_step(&mut self, _ordinal: u8, _group: u8, _title: &str) {}
    fn set_complete(&mut self, _ordinal: u8, _complete: bool) {}
    fn publish(&mut self, _title: &str, _status: &str) {}
}

/// Transmit buffer capacity in bytes
pub const TX_CAPACITY: usize = 1024;

/// Sink that encodes the feed as dashboard link frames
///
/// Frames accumulate in an internal buffer until the transport drains them
/// with [`PanelReporter::pending`] / [`PanelReporter::clear_pending`].
/// Repeated identical results and publishes are suppressed; a frame that
/// does not fit the remaining buffer is dropped and counted.
#[derive(Debug)]
pub struct PanelReporter {
    tx: Vec<u8, TX_CAPACITY>,
    last_result: [Option<bool>; MAX_STEPS],
    last_title: String<MAX_TITLE_LEN>,
    last_status: String<MAX_STATUS_LEN>,
    published: bool,
    dropped: u16,
}

impl Default for PanelReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelReporter {
    /// Create a reporter with an empty transmit buffer
    pub fn new() -> Self {
        Self {
            tx: Vec::new(),
            last_result: [None; MAX_STEPS],
            last_title: String::new(),
            last_status: String::new(),
            published: false,
            dropped: 0,
        }
    }

    /// Bytes waiting to be written to the transport
    pub fn pending(&self) -> &[u8] {
        &self.tx
    }

    /// Discard the bytes returned by the last [`PanelReporter::pending`]
    pub fn clear_pending(&mut self) {
        self.tx.clear();
    }

    /// Frames dropped because the transmit buffer was full
    pub fn dropped_frames(&self) -> u16 {
        self.dropped
    }

    /// Queue a panel clear and forget the suppression state
    pub fn clear_panel(&mut self) {
        self.last_result = [None; MAX_STEPS];
        self.published = false;
        if let Ok(frame) = RigMessage::Clear.to_frame() {
            self.enqueue(&frame);
        }
    }

    fn enqueue(&mut self, frame: &Frame) {
        let encoded = frame.encode_to_vec();
        if self.tx.extend_from_slice(&encoded).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}

impl StatusSink for PanelReporter {
    fn register_step(&mut self, ordinal: u8, group: u8, title: &str) {
        if let Ok(frame) = (RigMessage::Register { ordinal, group, title }).to_frame() {
            self.enqueue(&frame);
        }
    }

    fn set_complete(&mut self, ordinal: u8, complete: bool) {
        let slot = match self.last_result.get_mut(ordinal as usize) {
            Some(slot) => slot,
            None => return,
        };
        if *slot == Some(complete) {
            return;
        }
        *slot = Some(complete);

        if let Ok(frame) = (RigMessage::Result {
            ordinal,
            passed: complete,
        })
        .to_frame()
        {
            self.enqueue(&frame);
        }
    }

    fn publish(&mut self, title: &str, status: &str) {
        if self.published
            && self.last_title.as_str() == title
            && self.last_status.as_str() == status
        {
            return;
        }
        self.published = true;
        self.last_title.clear();
        let _ = self.last_title.push_str(title);
        self.last_status.clear();
        let _ = self.last_status.push_str(status);

        if let Ok(frame) = (RigMessage::Publish { title, status }).to_frame() {
            self.enqueue(&frame);
        }
    }
}
