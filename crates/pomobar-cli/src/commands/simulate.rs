use std::error::Error;

use clap::Args;
use pomobar_core::IntervalSequencer;

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of one-second ticks to deliver
    #[arg(long)]
    ticks: u64,
    /// Leave the sequencer stopped after a slot completion instead of
    /// restarting it
    #[arg(long)]
    no_auto_advance: bool,
    /// Also print each transition event as a JSON line
    #[arg(long)]
    events: bool,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn Error>> {
    let mut seq = IntervalSequencer::new();
    seq.start();

    for _ in 0..args.ticks {
        if !seq.is_running() {
            if args.no_auto_advance {
                break;
            }
            seq.start();
        }
        if let Some(event) = seq.tick() {
            if args.events {
                println!("{}", serde_json::to_string(&event)?);
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&seq.snapshot())?);
    Ok(())
}
