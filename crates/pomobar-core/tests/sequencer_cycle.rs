//! Full-cycle integration tests driving the sequencer through its
//! public API, plus operation-sequence invariants.

use proptest::prelude::*;

use pomobar_core::sequencer::{slot_duration_secs, SLOT_COUNT};
use pomobar_core::{Event, IntervalSequencer, SequencerState};

/// Drive the sequencer through one entire cycle, restarting after each
/// completion the way the shell does.
fn drive_full_cycle(seq: &mut IntervalSequencer) -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..SLOT_COUNT {
        seq.start();
        loop {
            if let Some(event) = seq.tick() {
                events.push(event);
                break;
            }
        }
    }
    events
}

#[test]
fn one_cycle_accumulates_four_work_sessions() {
    let mut seq = IntervalSequencer::new();
    let events = drive_full_cycle(&mut seq);

    assert_eq!(events.len(), 8);
    let work_finished = events
        .iter()
        .filter(|e| matches!(e, Event::WorkSessionFinished { .. }))
        .count();
    assert_eq!(work_finished, 4);
    assert!(matches!(
        events.last(),
        Some(Event::CycleCompleted {
            completed_cycles: 1,
            ..
        })
    ));

    let stats = seq.stats();
    assert_eq!(stats.completed_cycles, 1);
    assert_eq!(stats.total_work_secs, 6000);
    assert_eq!(stats.total_work_min(), 100);
    assert_eq!(seq.slot_index(), 0);
    assert_eq!(seq.remaining_secs(), slot_duration_secs(0));
    assert_eq!(seq.state(), SequencerState::Stopped);
}

#[test]
fn cycles_keep_accumulating() {
    let mut seq = IntervalSequencer::new();
    for _ in 0..3 {
        drive_full_cycle(&mut seq);
    }
    let stats = seq.stats();
    assert_eq!(stats.completed_cycles, 3);
    assert_eq!(stats.total_work_secs, 18_000);
}

#[test]
fn mixed_skips_and_ticks_close_a_cycle() {
    let mut seq = IntervalSequencer::new();

    // Work the first slot for two minutes, then skip everything else.
    seq.start();
    for _ in 0..120 {
        seq.tick();
    }
    seq.skip();
    for _ in 1..SLOT_COUNT {
        seq.skip();
    }

    let stats = seq.stats();
    assert_eq!(stats.completed_cycles, 1);
    assert_eq!(stats.total_work_secs, 120);
    assert_eq!(seq.slot_index(), 0);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    Stop,
    Tick,
    Skip,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        1 => Just(Op::Stop),
        6 => Just(Op::Tick),
        1 => Just(Op::Skip),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_under_any_op_sequence(
        ops in prop::collection::vec(op_strategy(), 0..2000)
    ) {
        let mut seq = IntervalSequencer::new();
        let mut last_work = 0u64;
        let mut last_cycles = 0u64;

        for op in ops {
            match op {
                Op::Start => {
                    seq.start();
                }
                Op::Stop => {
                    seq.stop();
                }
                Op::Tick => {
                    seq.tick();
                }
                Op::Skip => {
                    seq.skip();
                }
            }

            prop_assert!(seq.slot_index() < SLOT_COUNT);
            prop_assert!(seq.remaining_secs() <= slot_duration_secs(seq.slot_index()));
            prop_assert_eq!(seq.total_work_secs() % 60, 0);
            prop_assert!(seq.total_work_secs() >= last_work);
            prop_assert!(seq.completed_cycles() >= last_cycles);
            last_work = seq.total_work_secs();
            last_cycles = seq.completed_cycles();
        }
    }
}
