use std::path::Path;

use super::ScenarioArgs;

pub fn run(source: &ScenarioArgs, output: Option<&Path>) -> Result<(), String> {
    let scenario = super::load_scenario(source)?;
    // Refuse to write documents that would not load.
    scenario
        .build()
        .map_err(|e| format!("scenario is invalid: {e}"))?;
    let content = scenario
        .to_json_pretty()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Wrote scenario to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
