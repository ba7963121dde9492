//! Terminal rendering for the run loop.

use std::io::Write;

use pomobar_core::sequencer::LONG_BREAK_SLOT;
use pomobar_core::{Config, Event, IntervalSequencer, SessionStats};

/// Format seconds as mm:ss.
pub fn format_clock(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Bar of `width` cells filled to `progress` (0.0 .. 1.0).
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}

/// One marker per slot leading up to the long break, filled for slots
/// already behind us in the current cycle.
pub fn dot_tracker(slot_index: usize) -> String {
    (0..LONG_BREAK_SLOT)
        .map(|i| if i < slot_index { '*' } else { '.' })
        .collect()
}

/// Redraw the in-place countdown line.
pub fn render_status_line(seq: &IntervalSequencer, config: &Config) {
    let mut line = String::new();
    if config.ui.show_dots {
        line.push_str(&dot_tracker(seq.slot_index()));
        line.push_str("  ");
    }
    line.push_str(seq.slot_kind().label());
    line.push(' ');
    line.push_str(&format_clock(seq.remaining_secs()));
    if config.ui.show_progress {
        line.push(' ');
        line.push_str(&progress_bar(seq.slot_progress(), 20));
    }
    print!("\r\x1b[K{line}");
    let _ = std::io::stdout().flush();
}

/// Human-readable announcement for a transition event, if it warrants one.
pub fn announce(event: &Event) -> Option<String> {
    match event {
        Event::SequencerStarted {
            kind,
            remaining_secs,
            ..
        } => Some(format!("{} - {}", kind.label(), format_clock(*remaining_secs))),
        Event::SequencerStopped { remaining_secs, .. } => {
            Some(format!("stopped at {}", format_clock(*remaining_secs)))
        }
        Event::WorkSessionFinished { credited_secs, .. } => Some(format!(
            "work session finished (+{} min)",
            credited_secs / 60
        )),
        Event::BreakFinished { kind, .. } => Some(format!("{} finished", kind.label())),
        Event::CycleCompleted {
            completed_cycles, ..
        } => Some(format!("cycle {completed_cycles} complete")),
        Event::StateSnapshot { .. } => None,
    }
}

/// End-of-session stats row.
pub fn summary(stats: &SessionStats) -> String {
    format!(
        "Pomodoros: {}  Minutes: {}",
        stats.completed_cycles,
        stats.total_work_min()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_as_mm_ss() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn progress_bar_fills_left_to_right() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
    }

    #[test]
    fn dot_tracker_marks_finished_slots() {
        assert_eq!(dot_tracker(0), ".......");
        assert_eq!(dot_tracker(3), "***....");
        assert_eq!(dot_tracker(7), "*******");
    }

    #[test]
    fn summary_reports_cycles_and_minutes() {
        let stats = SessionStats {
            completed_cycles: 2,
            total_work_secs: 3600,
        };
        assert_eq!(summary(&stats), "Pomodoros: 2  Minutes: 60");
    }
}
