use std::error::Error;

use clap::Subcommand;
use pomobar_core::sequencer::{cycle_duration_secs, slots};

#[derive(Subcommand)]
pub enum CycleAction {
    /// Show the fixed eight-slot cycle
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CycleAction) -> Result<(), Box<dyn Error>> {
    match action {
        CycleAction::Show { json } => {
            let slots = slots();
            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                for slot in &slots {
                    println!(
                        "{:>2}  {:<12} {:>3} min",
                        slot.index,
                        slot.label,
                        slot.duration_secs / 60
                    );
                }
                println!("total: {} min", cycle_duration_secs() / 60);
            }
        }
    }
    Ok(())
}
