//! In-memory session statistics.
//!
//! The aggregate lives and dies with the sequencer; nothing is persisted
//! across restarts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Full eight-slot cycles closed so far.
    pub completed_cycles: u64,
    /// Credited work time in seconds, always a whole number of minutes.
    pub total_work_secs: u64,
}

impl SessionStats {
    pub fn total_work_min(&self) -> u64 {
        self.total_work_secs / 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_minutes_derive_from_seconds() {
        let stats = SessionStats {
            completed_cycles: 1,
            total_work_secs: 6000,
        };
        assert_eq!(stats.total_work_min(), 100);
    }
}
