use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ol_core::{Planet, World};
use ol_simulation::{SimConfig, SimEventKind, Simulation, planet_value, world_value};

use super::ScenarioArgs;

pub fn run(
    source: &ScenarioArgs,
    ticks: u64,
    delta: f64,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(format!("--delta must be a positive number, got {delta}"));
    }

    let scenario = super::load_scenario(source)?;
    let world = scenario
        .build()
        .map_err(|e| format!("scenario is invalid: {e}"))?;

    let config = SimConfig::default().with_max_events(500);
    let starting_money = world.money;
    let mut sim = Simulation::new(world, config);
    sim.run(ticks, delta);

    if json {
        let snapshot = sim
            .snapshot()
            .to_json_pretty()
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{snapshot}");
        return Ok(());
    }

    // Header
    let totals = sim.totals();
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({ticks} ticks, {delta}s/tick, {:.1}s simulated)",
            sim.clock().elapsed_seconds()
        )
        .dimmed()
    );
    println!(
        "  {} planets, {} ships, {} events logged",
        sim.world().planets.len(),
        sim.world().ships.len(),
        sim.events().len()
    );
    println!(
        "  Money: {:.2} -> {}  (income {:.2}, upkeep {:.2})",
        starting_money,
        format_money(sim.world().money),
        totals.income,
        totals.upkeep
    );
    println!(
        "  {} arrivals, {} waste collected, {} waste dumped",
        totals.arrivals, totals.waste_loaded, totals.waste_dumped
    );
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let tick_label = format!("[tick {:>5}]", event.tick).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {tick_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let anomalies = sim.events().anomalies();
        let bankrupt: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::Bankrupt { .. }))
            .collect();

        if !anomalies.is_empty() || !bankrupt.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in &bankrupt {
                println!("  {}  {}", "BROKE".red().bold(), event.description);
            }
            for event in &anomalies {
                println!("  {}   {}", "WARN".yellow().bold(), event.description);
            }
            println!();
        }
    }

    print_planets(sim.world(), sim.config());
    print_ships(sim.world());

    Ok(())
}

fn print_planets(world: &World, config: &SimConfig) {
    println!("  {}", "Planets".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Planet",
        "Population",
        "Waste",
        "Capacity",
        "Occupancy",
        "Value",
    ]);
    for planet in world.planets.values() {
        table.add_row(vec![
            planet.id.to_string(),
            planet.population.to_string(),
            planet.waste.to_string(),
            planet.capacity.to_string(),
            format_occupancy_bar(planet),
            format!("{:.1}", planet_value(planet, &config.valuation)),
        ]);
    }
    println!("{table}");
    println!(
        "  Total value: {:.1}",
        world_value(world, &config.valuation)
    );
    println!();
}

fn print_ships(world: &World) {
    println!("  {}", "Ships".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Ship", "Type", "Route", "Heading to", "Cargo", "Speed", "Position",
    ]);
    for ship in world.ships.values() {
        let (route, heading) = match ship.assignment.route() {
            Some(route_id) => {
                let heading = world
                    .route(route_id)
                    .zip(ship.assignment.node_index())
                    .and_then(|(route, index)| route.node(index))
                    .map(|node| format!("{} ({})", node.planet, node.action))
                    .unwrap_or_else(|| "--".to_string());
                (route_id.to_string(), heading)
            }
            None => ("idle".dimmed().to_string(), "--".to_string()),
        };
        table.add_row(vec![
            ship.id.to_string(),
            ship.ship_type.name.clone(),
            route,
            heading,
            format!("{}/{}", ship.waste, ship.ship_type.capacity),
            format!("{:.1}", ship.current_speed),
            format!("({:.0}, {:.0})", ship.position.x, ship.position.y),
        ]);
    }
    println!("{table}");
    println!();
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::Bankrupt { .. } => description.red().bold(),
        SimEventKind::InvalidAction { .. }
        | SimEventKind::MissingRoute { .. }
        | SimEventKind::MissingPlanet { .. } => description.yellow(),
        SimEventKind::PopulationDisplaced { .. } => description.red(),
        SimEventKind::WasteLoaded { .. } => description.green(),
        SimEventKind::WasteDumped { .. } => description.cyan(),
        SimEventKind::Arrived { .. } | SimEventKind::RouteCursorReset { .. } => description.blue(),
    }
}

fn format_money(money: f64) -> String {
    let text = format!("{money:.2}");
    if money <= 0.0 {
        text.red().bold().to_string()
    } else {
        text.green().to_string()
    }
}

fn format_occupancy_bar(planet: &Planet) -> String {
    let cap = f64::from(planet.capacity.max(1));
    let pop = ((f64::from(planet.population) / cap) * 10.0).round() as usize;
    let waste = ((f64::from(planet.waste) / cap) * 10.0).round() as usize;
    let waste = waste.min(10);
    let pop = pop.min(10 - waste);
    let empty = 10 - pop - waste;
    format!(
        "[{}{}{}]",
        "#".repeat(pop).green(),
        "x".repeat(waste).red(),
        "-".repeat(empty)
    )
}
