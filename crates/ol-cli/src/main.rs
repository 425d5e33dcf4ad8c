//! Headless command-line host for the Orbital Logistics engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::ScenarioArgs;

#[derive(Parser)]
#[command(
    name = "ol",
    about = "Orbital Logistics: a waste-hauling economy sandbox",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation and report the final state
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,

        /// Simulated seconds per tick
        #[arg(short, long, default_value = "0.1")]
        delta: f64,

        #[command(flatten)]
        source: ScenarioArgs,

        /// Show all events (not just notable ones)
        #[arg(short, long)]
        verbose: bool,

        /// Print the final state as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List the stock ship templates
    ShipTypes,

    /// Write a scenario document that `simulate --scenario` can load
    Scenario {
        #[command(flatten)]
        source: ScenarioArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            delta,
            source,
            verbose,
            json,
        } => commands::simulate::run(&source, ticks, delta, verbose, json),
        Commands::ShipTypes => commands::ship_types::run(),
        Commands::Scenario { source, output } => {
            commands::scenario::run(&source, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
