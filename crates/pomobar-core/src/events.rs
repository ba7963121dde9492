use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sequencer::{SequencerState, SlotKind};

/// Every observable transition in the sequencer produces an Event.
/// The shell consumes each one exactly once; one-shot effects
/// (notification, terminal bell) key off the completion variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SequencerStarted {
        slot_index: usize,
        kind: SlotKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SequencerStopped {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A work slot finished, naturally or by skip. Carries the credited
    /// work time so the shell can announce it.
    WorkSessionFinished {
        slot_index: usize,
        credited_secs: u64,
        skipped: bool,
        at: DateTime<Utc>,
    },
    BreakFinished {
        slot_index: usize,
        kind: SlotKind,
        skipped: bool,
        at: DateTime<Utc>,
    },
    /// The long break finished; a full cycle is closed.
    CycleCompleted {
        completed_cycles: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SequencerState,
        slot_index: usize,
        kind: SlotKind,
        label: String,
        remaining_secs: u64,
        total_secs: u64,
        slot_progress: f64,
        completed_cycles: u64,
        total_work_secs: u64,
        at: DateTime<Utc>,
    },
}
