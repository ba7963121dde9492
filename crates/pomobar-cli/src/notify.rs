//! Desktop notification and terminal bell dispatch.
//!
//! Both are fire-and-forget: a missing notification daemon or a terminal
//! that swallows the bell never affects the sequencer.

use std::io::Write;

use notify_rust::Notification;
use pomobar_core::{Config, Event};

/// One-shot effects for a slot-completion event.
pub fn slot_finished(event: &Event, config: &Config) {
    let body = match event {
        Event::WorkSessionFinished { credited_secs, .. } => {
            format!("Work session finished (+{} min)", credited_secs / 60)
        }
        Event::BreakFinished { kind, .. } => format!("{} finished", kind.label()),
        Event::CycleCompleted {
            completed_cycles, ..
        } => format!("Cycle {completed_cycles} complete"),
        _ => return,
    };

    if config.notifications.bell {
        print!("\x07");
        let _ = std::io::stdout().flush();
    }

    if config.notifications.enabled {
        if let Err(e) = Notification::new().summary("Pomobar").body(&body).show() {
            eprintln!("Warning: failed to show notification: {e}");
        }
    }
}
