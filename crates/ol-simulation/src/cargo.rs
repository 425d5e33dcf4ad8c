//! Cargo transfer between a docked ship and a planet.

use ol_core::{Action, Planet, Ship};

use crate::economy::correct_overflow;

/// Result of executing a route stop's action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    /// Waste moved planet -> ship.
    Loaded {
        /// Units moved.
        amount: u32,
    },
    /// Waste moved ship -> planet.
    Dumped {
        /// Units moved.
        amount: u32,
        /// Inhabitants pushed out by the extra waste.
        displaced: u32,
    },
    /// The action is not one this engine performs; nothing moved.
    Skipped {
        /// The unrecognised action tag.
        action: String,
    },
}

/// Apply `action` for `ship` docked at `planet`, crediting `money` for
/// collected waste at `money_per_waste` per unit.
///
/// A full hold, an empty planet, or a full planet are no-ops, not errors.
pub fn execute_ship_action(
    ship: &mut Ship,
    action: &Action,
    planet: &mut Planet,
    money: &mut f64,
    money_per_waste: f64,
) -> Transfer {
    match action {
        Action::LoadWaste => {
            let amount = planet.waste.min(ship.free_capacity());
            ship.waste += amount;
            planet.waste -= amount;
            *money += f64::from(amount) * money_per_waste;
            Transfer::Loaded { amount }
        }
        Action::DumpWaste => {
            let amount = ship.waste.min(planet.waste_room());
            ship.waste -= amount;
            planet.waste += amount;
            let displaced = correct_overflow(planet);
            Transfer::Dumped { amount, displaced }
        }
        Action::Other(tag) => Transfer::Skipped {
            action: tag.clone(),
        },
    }
}
