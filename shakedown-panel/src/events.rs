//! Operator commands sent from the dashboard panel

/// Command values sent by the panel's checklist buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelCommand {
    /// Advance button pressed (one edge)
    Advance,
    /// Skip button pressed (one edge)
    Skip,
    /// Reset button pressed (one edge)
    Reset,
    /// Teleop override toggled on (level)
    TeleopOn,
    /// Teleop override toggled off (level)
    TeleopOff,
    /// Operator entered checklist mode
    Enter,
    /// Operator left checklist mode
    Exit,
}

// Wire format values
const CMD_ADVANCE: u8 = 0x01;
const CMD_SKIP: u8 = 0x02;
const CMD_RESET: u8 = 0x03;
const CMD_TELEOP_ON: u8 = 0x10;
const CMD_TELEOP_OFF: u8 = 0x11;
const CMD_ENTER: u8 = 0x20;
const CMD_EXIT: u8 = 0x21;

impl PanelCommand {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_ADVANCE => Some(PanelCommand::Advance),
            CMD_SKIP => Some(PanelCommand::Skip),
            CMD_RESET => Some(PanelCommand::Reset),
            CMD_TELEOP_ON => Some(PanelCommand::TeleopOn),
            CMD_TELEOP_OFF => Some(PanelCommand::TeleopOff),
            CMD_ENTER => Some(PanelCommand::Enter),
            CMD_EXIT => Some(PanelCommand::Exit),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            PanelCommand::Advance => CMD_ADVANCE,
            PanelCommand::Skip => CMD_SKIP,
            PanelCommand::Reset => CMD_RESET,
            PanelCommand::TeleopOn => CMD_TELEOP_ON,
            PanelCommand::TeleopOff => CMD_TELEOP_OFF,
            PanelCommand::Enter => CMD_ENTER,
            PanelCommand::Exit => CMD_EXIT,
        }
    }

    /// Returns true for the edge-triggered checklist controls
    ///
    /// Edge commands are consumed once by the sequencer; level commands
    /// (teleop) persist until toggled.
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            PanelCommand::Advance | PanelCommand::Skip | PanelCommand::Reset
        )
    }

    /// Returns true for mode entry/exit commands
    pub fn is_mode(&self) -> bool {
        matches!(self, PanelCommand::Enter | PanelCommand::Exit)
    }
}
