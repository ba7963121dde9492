//! Interval sequencer implementation.
//!
//! The sequencer is a tick-driven state machine. It holds no clock and
//! spawns no threads - the caller delivers one `tick()` per elapsed second
//! while it is running.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running -> Stopped
//! ```
//!
//! Every slot completion (natural or skipped) leaves the sequencer Stopped;
//! whether the next slot starts automatically is the shell's decision.
//!
//! ## Usage
//!
//! ```ignore
//! let mut seq = IntervalSequencer::new();
//! seq.start();
//! // Once per second:
//! seq.tick(); // Returns Some(Event) when a slot finishes
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::cycle::{self, SlotKind, LONG_BREAK_SLOT, WORK_SECS};
use crate::events::Event;
use crate::stats::SessionStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequencerState {
    Stopped,
    Running,
}

/// The eight-slot work/break state machine.
///
/// Every operation is total: invalid combinations (tick while stopped,
/// start while running) are no-ops that return `None`, never errors.
#[derive(Debug, Clone)]
pub struct IntervalSequencer {
    state: SequencerState,
    /// Position in the fixed cycle, always within `0..SLOT_COUNT`.
    slot_index: usize,
    /// Countdown for the current slot, in seconds.
    remaining_secs: u64,
    completed_cycles: u64,
    /// Credited work time in seconds, always a whole number of minutes.
    total_work_secs: u64,
}

impl IntervalSequencer {
    /// Create a sequencer at the start of a fresh cycle: stopped, slot 0,
    /// a full work session on the clock.
    pub fn new() -> Self {
        Self {
            state: SequencerState::Stopped,
            slot_index: 0,
            remaining_secs: WORK_SECS,
            completed_cycles: 0,
            total_work_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SequencerState::Running
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    pub fn slot_kind(&self) -> SlotKind {
        cycle::slot_kind(self.slot_index)
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        cycle::slot_duration_secs(self.slot_index)
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    pub fn total_work_secs(&self) -> u64 {
        self.total_work_secs
    }

    /// 0.0 .. 1.0 progress within the current slot.
    pub fn slot_progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            completed_cycles: self.completed_cycles,
            total_work_secs: self.total_work_secs,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let kind = self.slot_kind();
        Event::StateSnapshot {
            state: self.state,
            slot_index: self.slot_index,
            kind,
            label: kind.label().to_string(),
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            slot_progress: self.slot_progress(),
            completed_cycles: self.completed_cycles,
            total_work_secs: self.total_work_secs,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.state == SequencerState::Running {
            return None; // Already running.
        }
        self.state = SequencerState::Running;
        Some(Event::SequencerStarted {
            slot_index: self.slot_index,
            kind: self.slot_kind(),
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn stop(&mut self) -> Option<Event> {
        if self.state == SequencerState::Stopped {
            return None; // Already stopped.
        }
        self.state = SequencerState::Stopped;
        Some(Event::SequencerStopped {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Call once per elapsed second while running.
    ///
    /// Decrements the countdown; a tick delivered to an exhausted slot
    /// performs the slot completion instead and returns its event.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SequencerState::Running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return None;
        }
        Some(self.complete_slot(false))
    }

    /// Force the current slot to complete immediately, regardless of
    /// remaining time or running state. Partial work time is still
    /// credited in whole minutes.
    pub fn skip(&mut self) -> Option<Event> {
        Some(self.complete_slot(true))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete_slot(&mut self, skipped: bool) -> Event {
        self.state = SequencerState::Stopped;
        let finished = self.slot_index;
        let kind = cycle::slot_kind(finished);

        let mut credited_secs = 0;
        if kind.is_work() {
            let elapsed = WORK_SECS.saturating_sub(self.remaining_secs);
            // Whole minutes only; a ten-second sprint credits nothing.
            credited_secs = elapsed - elapsed % 60;
            self.total_work_secs += credited_secs;
        }

        if finished == LONG_BREAK_SLOT {
            self.completed_cycles += 1;
            self.slot_index = 0;
            self.remaining_secs = WORK_SECS;
            return Event::CycleCompleted {
                completed_cycles: self.completed_cycles,
                at: Utc::now(),
            };
        }

        self.slot_index += 1;
        self.remaining_secs = cycle::slot_duration_secs(self.slot_index);
        if kind.is_work() {
            Event::WorkSessionFinished {
                slot_index: finished,
                credited_secs,
                skipped,
                at: Utc::now(),
            }
        } else {
            Event::BreakFinished {
                slot_index: finished,
                kind,
                skipped,
                at: Utc::now(),
            }
        }
    }
}

impl Default for IntervalSequencer {
    fn default() -> Self {
        Self::new()
    }
}
