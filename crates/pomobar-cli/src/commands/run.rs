use std::error::Error;

use clap::Args;
use pomobar_core::{Config, Event, IntervalSequencer};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::display;
use crate::notify;

#[derive(Args)]
pub struct RunArgs {
    /// Stop after this many slot completions (default: one full cycle)
    #[arg(long)]
    slots: Option<u32>,
    /// Emit events as JSON lines instead of the live display
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(session(args, config))
}

async fn session(args: RunArgs, config: Config) -> Result<(), Box<dyn Error>> {
    let mut seq = IntervalSequencer::new();
    let mut finished_slots: u32 = 0;

    if let Some(event) = seq.start() {
        emit(&event, args.json)?;
    }

    // The sequencer holds no clock; this interval is the one source of
    // ticks, and dropping it on exit guarantees none outlive the loop.
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first firing is immediate; consume it so the countdown starts a
    // full second after the display appears.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match seq.tick() {
                    Some(event) => {
                        finished_slots += 1;
                        emit(&event, args.json)?;
                        notify::slot_finished(&event, &config);

                        let done = match args.slots {
                            Some(n) => finished_slots >= n,
                            None => matches!(event, Event::CycleCompleted { .. }),
                        };
                        if done || !config.auto_advance {
                            break;
                        }
                        if let Some(started) = seq.start() {
                            emit(&started, args.json)?;
                        }
                    }
                    None => {
                        if !args.json {
                            display::render_status_line(&seq, &config);
                        }
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if let Some(event) = seq.stop() {
                    emit(&event, args.json)?;
                }
                break;
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string(&seq.snapshot())?);
    } else {
        println!("{}", display::summary(&seq.stats()));
    }
    Ok(())
}

fn emit(event: &Event, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else if let Some(line) = display::announce(event) {
        // Clear the in-place status line before the announcement.
        print!("\r\x1b[K");
        println!("{line}");
    }
    Ok(())
}
