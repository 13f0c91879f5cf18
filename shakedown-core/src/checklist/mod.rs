//! Checklist model and sequencer
//!
//! A checklist is an ordered, fixed list of steps. Leaf steps are small
//! state machines driven by operator edges and hardware feedback; aggregate
//! steps recompute completion from named children; the final step is the
//! terminal "all complete" gate. The sequencer owns the steps and a cursor
//! and advances one step per completion.

pub mod catalog;
pub mod sequencer;
pub mod step;

pub use catalog::standard_checklist;
pub use sequencer::{BuildError, Checklist, StepSpec};
pub use step::{CheckKind, Step, StepId};

/// Maximum steps in a checklist
pub const MAX_STEPS: usize = 32;

/// Maximum children of an aggregate step
pub const MAX_CHILDREN: usize = 8;

/// Maximum step title length carried on the dashboard link
pub const MAX_TITLE_LEN: usize = 24;

/// Maximum status line length
pub const MAX_STATUS_LEN: usize = 96;
