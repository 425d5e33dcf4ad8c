use serde::Serialize;

use ol_core::{PlanetId, Position, RouteId, ShipId, World};

/// What the presentation layer needs to draw one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetView {
    /// Planet id.
    pub id: PlanetId,
    /// Current position.
    pub position: Position,
    /// Total slots.
    pub capacity: u32,
    /// Current inhabitants.
    pub population: u32,
    /// Current waste.
    pub waste: u32,
}

/// What the presentation layer needs to draw one ship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    /// Ship id.
    pub id: ShipId,
    /// Template key.
    pub ship_type: String,
    /// Current position.
    pub position: Position,
    /// Facing angle in radians.
    pub direction: f64,
    /// Current speed.
    pub speed: f64,
    /// Cargo.
    pub waste: u32,
    /// Assigned route, if any.
    pub route: Option<RouteId>,
    /// Route cursor, if transiting.
    pub destination_index: Option<usize>,
}

/// A read-only copy of everything a host reads after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    /// Tick the snapshot was taken after.
    pub tick: u64,
    /// Treasury.
    pub money: f64,
    /// Planets in id order.
    pub planets: Vec<PlanetView>,
    /// Ships in id order.
    pub ships: Vec<ShipView>,
}

impl WorldSnapshot {
    /// Copy the observable state out of `world`.
    pub fn capture(world: &World, tick: u64) -> Self {
        let planets = world
            .planets
            .values()
            .map(|p| PlanetView {
                id: p.id.clone(),
                position: p.position,
                capacity: p.capacity,
                population: p.population,
                waste: p.waste,
            })
            .collect();
        let ships = world
            .ships
            .values()
            .map(|s| ShipView {
                id: s.id.clone(),
                ship_type: s.ship_type.key.clone(),
                position: s.position,
                direction: s.direction,
                speed: s.current_speed,
                waste: s.waste,
                route: s.assignment.route().cloned(),
                destination_index: s.assignment.node_index(),
            })
            .collect();
        Self {
            tick,
            money: world.money,
            planets,
            ships,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_core::{Planet, Ship, ShipTypeRegistry};

    #[test]
    fn capture_copies_observable_state() {
        let registry = ShipTypeRegistry::standard();
        let mut world = World::new(12.5);
        world
            .add_planet(Planet::new("terra", Position::new(1.0, 2.0), 10).with_waste(3))
            .unwrap();
        world
            .add_ship(Ship::new("s1", registry.require("freighter").unwrap(), Position::new(4.0, 5.0)))
            .unwrap();

        let snap = WorldSnapshot::capture(&world, 9);
        assert_eq!(snap.tick, 9);
        assert!((snap.money - 12.5).abs() < f64::EPSILON);
        assert_eq!(snap.planets[0].waste, 3);
        assert_eq!(snap.ships[0].ship_type, "freighter");
        assert_eq!(snap.ships[0].route, None);
        assert_eq!(snap.ships[0].destination_index, None);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let world = World::new(3.0);
        let json = WorldSnapshot::capture(&world, 0).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["money"], 3.0);
        assert!(value["planets"].as_array().unwrap().is_empty());
    }
}
