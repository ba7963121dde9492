use serde::{Deserialize, Serialize};

/// Slots per cycle: four work sessions, three short breaks, one long break.
pub const SLOT_COUNT: usize = 8;

/// Index of the long break, the final slot of the cycle.
pub const LONG_BREAK_SLOT: usize = SLOT_COUNT - 1;

/// Work session duration in seconds (25 minutes).
pub const WORK_SECS: u64 = 25 * 60;

/// Short break duration in seconds (5 minutes).
pub const SHORT_BREAK_SECS: u64 = 5 * 60;

/// Long break duration in seconds (15 minutes).
pub const LONG_BREAK_SECS: u64 = 15 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl SlotKind {
    pub fn is_work(self) -> bool {
        matches!(self, SlotKind::Work)
    }

    pub fn label(self) -> &'static str {
        match self {
            SlotKind::Work => "Focus",
            SlotKind::ShortBreak => "Short Break",
            SlotKind::LongBreak => "Long Break",
        }
    }
}

/// Kind of the slot at `index`: even indices below the long break are work
/// sessions, odd indices short breaks, the final slot the long break.
/// Indices wrap modulo the cycle length.
pub fn slot_kind(index: usize) -> SlotKind {
    let index = index % SLOT_COUNT;
    if index == LONG_BREAK_SLOT {
        SlotKind::LongBreak
    } else if index % 2 == 0 {
        SlotKind::Work
    } else {
        SlotKind::ShortBreak
    }
}

/// Fixed duration in seconds of the slot at `index`.
pub fn slot_duration_secs(index: usize) -> u64 {
    match slot_kind(index) {
        SlotKind::Work => WORK_SECS,
        SlotKind::ShortBreak => SHORT_BREAK_SECS,
        SlotKind::LongBreak => LONG_BREAK_SECS,
    }
}

/// Total seconds in one full cycle.
pub fn cycle_duration_secs() -> u64 {
    (0..SLOT_COUNT).map(slot_duration_secs).sum()
}

/// Render-ready view of one slot, used by the CLI's cycle listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    pub kind: SlotKind,
    /// Duration in seconds.
    pub duration_secs: u64,
    pub label: String,
}

/// The full cycle as a list of [`Slot`]s.
pub fn slots() -> Vec<Slot> {
    (0..SLOT_COUNT)
        .map(|index| {
            let kind = slot_kind(index);
            Slot {
                index,
                kind,
                duration_secs: slot_duration_secs(index),
                label: kind.label().to_string(),
            }
        })
        .collect()
}
