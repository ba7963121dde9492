mod cycle;
mod engine;

pub use cycle::{
    cycle_duration_secs, slot_duration_secs, slot_kind, slots, Slot, SlotKind, LONG_BREAK_SECS,
    LONG_BREAK_SLOT, SHORT_BREAK_SECS, SLOT_COUNT, WORK_SECS,
};
pub use engine::{IntervalSequencer, SequencerState};
