use clap::{Parser, Subcommand};

mod commands;
mod display;
mod notify;

#[derive(Parser)]
#[command(name = "pomobar", version, about = "Pomobar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a foreground timer session
    Run(commands::run::RunArgs),
    /// Deliver simulated ticks and print the resulting state
    Simulate(commands::simulate::SimulateArgs),
    /// Inspect the fixed work/break cycle
    Cycle {
        #[command(subcommand)]
        action: commands::cycle::CycleAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Cycle { action } => commands::cycle::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
