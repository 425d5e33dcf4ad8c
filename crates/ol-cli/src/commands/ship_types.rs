use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ol_core::ShipTypeRegistry;

pub fn run() -> Result<(), String> {
    let registry = ShipTypeRegistry::standard();

    println!("  {}", "Ship Types".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Key", "Name", "Hold", "Max speed", "Accel", "Upkeep/s", "Build cost",
    ]);
    for ship_type in registry.iter() {
        table.add_row(vec![
            ship_type.key.clone(),
            ship_type.name.clone(),
            ship_type.capacity.to_string(),
            format!("{:.1}", ship_type.max_speed),
            format!("{:.1}", ship_type.acceleration),
            format!("{:.1}", ship_type.upkeep_cost),
            format!("{:.1}", ship_type.build_cost),
        ]);
    }

    println!("{table}");
    Ok(())
}
