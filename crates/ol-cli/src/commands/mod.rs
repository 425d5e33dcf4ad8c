pub mod scenario;
pub mod ship_types;
pub mod simulate;

use std::path::PathBuf;

use clap::Args;
use ol_simulation::Scenario;

/// Where the starting world comes from. Defaults to the stock demo map.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Load a scenario JSON file
    #[arg(long, conflicts_with = "random")]
    pub scenario: Option<PathBuf>,

    /// Generate a random scenario instead of the demo map
    #[arg(long)]
    pub random: bool,

    /// RNG seed for --random
    #[arg(short, long, default_value = "42")]
    pub seed: u64,

    /// Planet count for --random
    #[arg(long, default_value = "8")]
    pub planets: usize,

    /// Ship count for --random
    #[arg(long, default_value = "5")]
    pub ships: usize,
}

/// Resolve the scenario the user asked for.
fn load_scenario(args: &ScenarioArgs) -> Result<Scenario, String> {
    if let Some(path) = &args.scenario {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        return Scenario::from_json(&json).map_err(|e| format!("{}: {e}", path.display()));
    }
    if args.random {
        return Scenario::random(args.seed, args.planets, args.ships).map_err(|e| e.to_string());
    }
    Ok(Scenario::demo())
}
