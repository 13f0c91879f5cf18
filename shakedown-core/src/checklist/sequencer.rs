//! Checklist sequencer
//!
//! Owns the step list and the cursor. Driven by one periodic tick; never
//! re-entered. Per tick: a reset edge outranks everything, then a skip
//! edge, then the teleop override level, then the current step evaluates
//! and the cursor advances on completion (clamped at the terminal step).

use heapless::Vec;

use super::catalog::group_status;
use super::step::{CheckKind, Step, StepId};
use super::MAX_STEPS;
use crate::checks::{self, CheckContext};
use crate::config::ChecklistConfig;
use crate::report::StatusSink;
use crate::signals::Controls;
use crate::teleop;
use crate::traits::Rig;

/// Title shown while the checklist is not running
pub const DISABLED_TITLE: &str = "Disabled";

/// Status shown while the checklist is not running
pub const DISABLED_STATUS: &str = "Enter checklist mode to run the rig checks";

/// Declarative description of one step, used to build a checklist
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    /// Stable identifier
    pub id: StepId,
    /// Display title
    pub title: &'static str,
    /// Display column; 0 marks a main step
    pub group: u8,
    /// Behavior for this step
    pub check: CheckKind,
}

/// Checklist construction errors
///
/// A malformed hierarchy refuses to build; it is never discovered at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError {
    /// The step table was empty
    Empty,
    /// More steps than the checklist can hold
    TooManySteps,
    /// An aggregate names more children than allowed
    TooManyChildren(StepId),
    /// The same identifier appears twice
    DuplicateId(StepId),
    /// An aggregate names a child that is not in the table
    UnknownChild { parent: StepId, child: StepId },
    /// An aggregate names another aggregate as a child
    NestedAggregate { parent: StepId, child: StepId },
    /// The terminal step must be the last entry, exactly once
    TerminalMisplaced,
}

/// The checklist sequencer
///
/// Exclusive owner of every [`Step`]; nothing else holds a mutable
/// reference to them. Exactly one step is current at any time.
#[derive(Debug)]
pub struct Checklist {
    steps: Vec<Step, MAX_STEPS>,
    cursor: u8,
    enabled: bool,
    config: ChecklistConfig,
}

impl Checklist {
    /// Build a checklist from a declarative step table
    ///
    /// Aggregate children are resolved to list positions here; any
    /// inconsistency fails the build.
    pub fn build(specs: &[StepSpec], config: ChecklistConfig) -> Result<Self, BuildError> {
        if specs.is_empty() {
            return Err(BuildError::Empty);
        }

        let mut steps: Vec<Step, MAX_STEPS> = Vec::new();
        for spec in specs {
            if steps.iter().any(|s| s.id() == spec.id) {
                return Err(BuildError::DuplicateId(spec.id));
            }
            let step = Step::new(spec.id, spec.title, spec.group, spec.check);
            steps.push(step).map_err(|_| BuildError::TooManySteps)?;
        }

        // The terminal gate must close the list, exactly once
        let terminal_count = steps
            .iter()
            .filter(|s| matches!(s.check(), CheckKind::AllComplete))
            .count();
        let last_is_terminal = matches!(
            steps.last().map(Step::check),
            Some(CheckKind::AllComplete)
        );
        if terminal_count != 1 || !last_is_terminal {
            return Err(BuildError::TerminalMisplaced);
        }

        // Resolve aggregate children once; runtime never looks them up
        for i in 0..steps.len() {
            let parent = steps[i].id();
            if let CheckKind::Aggregate(children) = steps[i].check() {
                for &child in children {
                    let pos = steps
                        .iter()
                        .position(|s| s.id() == child)
                        .ok_or(BuildError::UnknownChild { parent, child })?;
                    if steps[pos].check().is_aggregate() {
                        return Err(BuildError::NestedAggregate { parent, child });
                    }
                    steps[i]
                        .children
                        .push(pos as u8)
                        .map_err(|_| BuildError::TooManyChildren(parent))?;
                }
            }
        }

        Ok(Self {
            steps,
            cursor: 0,
            enabled: false,
            config,
        })
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a built checklist
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the checklist is actively running
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current cursor position
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Identifier of the step at the cursor
    pub fn current_id(&self) -> StepId {
        self.steps[self.cursor as usize].id()
    }

    /// All steps, in run order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Look up a step by identifier
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// Thresholds the checks run against
    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    /// Current step title, or the disabled banner
    ///
    /// Pure and cheap; callable at any frequency.
    pub fn current_title(&self) -> &str {
        if self.enabled {
            self.steps[self.cursor as usize].title()
        } else {
            DISABLED_TITLE
        }
    }

    /// Current step status line, or the disabled banner
    ///
    /// Pure and cheap; callable at any frequency.
    pub fn current_status(&self) -> &str {
        if self.enabled {
            self.steps[self.cursor as usize].status()
        } else {
            DISABLED_STATUS
        }
    }

    /// Announce every step tile to the sink (init time)
    pub fn register(&self, sink: &mut dyn StatusSink) {
        for (ordinal, step) in self.steps.iter().enumerate() {
            sink.register_step(ordinal as u8, step.group(), step.title());
        }
    }

    /// Enter checklist mode
    ///
    /// Resets every step and the cursor, drains edges latched while
    /// disabled, and takes the compressor away from its closed loop so
    /// the pneumatic checks own it.
    pub fn enter(
        &mut self,
        rig: &mut dyn Rig,
        controls: &mut dyn Controls,
        sink: &mut dyn StatusSink,
    ) {
        self.enabled = true;
        rig.disable_compressor();

        let _ = controls.take_advance();
        let _ = controls.take_skip();
        let _ = controls.take_reset();

        self.reset_all(sink);
    }

    /// Leave checklist mode, preserving all progress
    ///
    /// Re-entering without a reset resumes exactly where the checklist
    /// left off (via [`Checklist::resume`]); `enter` starts over.
    pub fn exit(&mut self, rig: &mut dyn Rig) {
        self.enabled = false;
        rig.enable_compressor();
    }

    /// Resume after an [`Checklist::exit`] without resetting progress
    pub fn resume(&mut self, rig: &mut dyn Rig) {
        self.enabled = true;
        rig.disable_compressor();
    }

    /// One scheduler cycle
    ///
    /// Does nothing while disabled: no step state changes and no hardware
    /// commands are issued.
    pub fn tick(
        &mut self,
        rig: &mut dyn Rig,
        controls: &mut dyn Controls,
        sink: &mut dyn StatusSink,
    ) {
        if !self.enabled {
            return;
        }

        // Reset outranks every other control this cycle and swallows any
        // pending edges with it
        if controls.take_reset() {
            let _ = controls.take_advance();
            let _ = controls.take_skip();
            self.reset_all(sink);
        } else if controls.take_skip() {
            self.skip(sink);
        }

        // Level signal, independent of checklist progress
        if controls.teleop_override() {
            teleop::passthrough(rig, &self.config);
        }

        debug_assert!((self.cursor as usize) < self.steps.len());
        let done = self.evaluate_current(rig, controls);
        sink.set_complete(self.cursor, done);

        if done && self.cursor < self.terminal() {
            self.cursor += 1;
        }

        sink.publish(self.current_title(), self.current_status());
    }

    /// Ordinal of the terminal step
    fn terminal(&self) -> u8 {
        (self.steps.len() - 1) as u8
    }

    /// Reset every step and rewind the cursor
    fn reset_all(&mut self, sink: &mut dyn StatusSink) {
        for (ordinal, step) in self.steps.iter_mut().enumerate() {
            step.reset();
            sink.set_complete(ordinal as u8, false);
        }
        self.cursor = 0;
    }

    /// Skip forward from the cursor
    ///
    /// Marks each passed-over step incomplete and stops one past the first
    /// main step, or at the terminal step, whichever comes first. From a
    /// sub-step this discards the rest of its group; from a main step it
    /// discards exactly that step. A skip issued on the terminal step
    /// marks it incomplete and leaves the cursor there.
    fn skip(&mut self, sink: &mut dyn StatusSink) {
        let terminal = self.terminal();
        while (self.cursor as usize) < self.steps.len() {
            let idx = self.cursor as usize;
            let was_main = self.steps[idx].is_main();
            self.steps[idx].force_incomplete();
            sink.set_complete(self.cursor, false);

            if self.cursor < terminal {
                self.cursor += 1;
            }
            if was_main || self.cursor == terminal {
                return;
            }
        }
    }

    /// Evaluate the step at the cursor and return its completion
    fn evaluate_current(&mut self, rig: &mut dyn Rig, controls: &mut dyn Controls) -> bool {
        let idx = self.cursor as usize;
        match self.steps[idx].check() {
            CheckKind::Aggregate(_) => {
                // Recomputed fresh on every call; children indices were
                // resolved at build time
                let done = self.steps[idx]
                    .children
                    .iter()
                    .all(|&child| self.steps[child as usize].complete());
                let status = group_status(self.steps[idx].id());
                let step = &mut self.steps[idx];
                step.set_aggregate_complete(done);
                step.set_status(status);
                done
            }
            CheckKind::AllComplete => {
                let done = self
                    .steps
                    .iter()
                    .enumerate()
                    .all(|(i, s)| i == idx || !s.is_main() || s.complete());
                let status = group_status(self.steps[idx].id());
                let step = &mut self.steps[idx];
                step.set_aggregate_complete(done);
                step.set_status(status);
                done
            }
            _ => {
                let mut ctx = CheckContext {
                    rig,
                    controls,
                    config: &self.config,
                };
                checks::run(&mut self.steps[idx], &mut ctx)
            }
        }
    }
}
