//! Operator signal latch
//!
//! The checklist is driven by three edge-triggered controls (advance, skip,
//! reset) and one level control (teleop override). Edge controls are
//! read-and-clear: reading true atomically rearms the control to false, so
//! one press is consumed exactly once.
//!
//! Ownership rule: the sequencer is the *single reader* of these latches.
//! Nothing else may call the `take_*` methods — a second reader would
//! silently swallow operator presses. Input sources (panel commands, direct
//! setters) only ever set.

use shakedown_panel::PanelCommand;

/// Edge-triggered operator controls consumed by the sequencer
pub trait Controls {
    /// Read and clear the advance edge
    fn take_advance(&mut self) -> bool;

    /// Read and clear the skip edge
    fn take_skip(&mut self) -> bool;

    /// Read and clear the reset edge
    fn take_reset(&mut self) -> bool;

    /// Current teleop override level (not consumed by reading)
    fn teleop_override(&self) -> bool;
}

/// Single-reader latch for the operator controls
///
/// Feed it [`PanelCommand`]s from the dashboard link (or call the press
/// methods directly in tests); the sequencer drains it once per tick.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalLatch {
    advance: bool,
    skip: bool,
    reset: bool,
    teleop: bool,
    enter: bool,
    exit: bool,
}

impl SignalLatch {
    /// Create a latch with every control clear
    pub const fn new() -> Self {
        Self {
            advance: false,
            skip: false,
            reset: false,
            teleop: false,
            enter: false,
            exit: false,
        }
    }

    /// Latch a command from the dashboard panel
    pub fn apply(&mut self, cmd: PanelCommand) {
        match cmd {
            PanelCommand::Advance => self.advance = true,
            PanelCommand::Skip => self.skip = true,
            PanelCommand::Reset => self.reset = true,
            PanelCommand::TeleopOn => self.teleop = true,
            PanelCommand::TeleopOff => self.teleop = false,
            PanelCommand::Enter => self.enter = true,
            PanelCommand::Exit => self.exit = true,
        }
    }

    /// Latch an advance press
    pub fn press_advance(&mut self) {
        self.advance = true;
    }

    /// Latch a skip press
    pub fn press_skip(&mut self) {
        self.skip = true;
    }

    /// Latch a reset press
    pub fn press_reset(&mut self) {
        self.reset = true;
    }

    /// Set the teleop override level
    pub fn set_teleop(&mut self, on: bool) {
        self.teleop = on;
    }

    /// Read and clear the mode-entry edge (routed by the application loop)
    pub fn take_enter(&mut self) -> bool {
        core::mem::take(&mut self.enter)
    }

    /// Read and clear the mode-exit edge (routed by the application loop)
    pub fn take_exit(&mut self) -> bool {
        core::mem::take(&mut self.exit)
    }
}

impl Controls for SignalLatch {
    fn take_advance(&mut self) -> bool {
        core::mem::take(&mut self.advance)
    }

    fn take_skip(&mut self) -> bool {
        core::mem::take(&mut self.skip)
    }

    fn take_reset(&mut self) -> bool {
        core::mem::take(&mut self.reset)
    }

    fn teleop_override(&self) -> bool {
        self.teleop
    }
}
