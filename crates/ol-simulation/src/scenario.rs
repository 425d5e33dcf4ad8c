//! Scenario construction: the stock demo map, seeded random maps, and a
//! JSON document format for hand-written maps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use ol_core::{
    Planet, Position, Route, RouteId, RouteNode, Ship, ShipId, ShipType, ShipTypeRegistry, World,
};

use crate::error::{SimError, SimResult};

/// A ship as written in a scenario document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    /// Ship id.
    pub id: ShipId,
    /// Registry key of the template.
    pub ship_type: String,
    /// Starting position.
    pub position: Position,
    /// Starting cargo.
    #[serde(default)]
    pub waste: u32,
    /// Route to start on, heading for its first stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteId>,
}

/// Everything needed to build a [`World`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Starting treasury.
    pub money: f64,
    /// Templates added to (or replacing) the stock catalogue.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ship_types: Vec<ShipType>,
    /// Planets.
    pub planets: Vec<Planet>,
    /// Routes. Every stop must name a listed planet.
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Ships.
    #[serde(default)]
    pub ships: Vec<ShipSpec>,
}

impl Scenario {
    /// Parse a scenario document.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as a pretty-printed scenario document.
    pub fn to_json_pretty(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The stock catalogue plus this scenario's own templates.
    pub fn registry(&self) -> ShipTypeRegistry {
        let mut registry = ShipTypeRegistry::standard();
        for ship_type in &self.ship_types {
            registry.register(ship_type.clone());
        }
        registry
    }

    /// Build and validate the world.
    pub fn build(&self) -> SimResult<World> {
        for ship_type in &self.ship_types {
            ship_type.validate()?;
        }
        let registry = self.registry();
        let mut world = World::new(self.money);
        for planet in &self.planets {
            world.add_planet(planet.clone())?;
        }
        for route in &self.routes {
            world.add_route(route.clone())?;
        }
        for spec in &self.ships {
            let mut ship = Ship::new(
                spec.id.clone(),
                registry.require(&spec.ship_type)?,
                spec.position,
            )
            .with_waste(spec.waste);
            if let Some(route) = &spec.route {
                ship.assign(route.clone());
            }
            world.add_ship(ship)?;
        }
        Ok(world)
    }

    /// A small hand-made system: two inhabited inner planets, a colony
    /// further out, and a scrapyard, with two patrols and a reserve ship.
    pub fn demo() -> Self {
        let terra = Position::new(0.0, 0.0);
        let scrapyard = Position::new(300.0, -200.0);
        Self {
            money: 500.0,
            ship_types: Vec::new(),
            planets: vec![
                Planet::new("terra", terra, 200)
                    .with_population(120)
                    .with_waste(10)
                    .with_radius(12.0),
                Planet::new("luna", Position::new(80.0, 60.0), 60)
                    .with_population(30)
                    .with_radius(6.0),
                Planet::new("mars", Position::new(-250.0, 120.0), 150)
                    .with_population(60)
                    .with_waste(20),
                Planet::new("scrapyard", scrapyard, 2_000).with_radius(15.0),
            ],
            routes: vec![
                Route::new(
                    "inner-loop",
                    vec![
                        RouteNode::load("terra"),
                        RouteNode::load("luna"),
                        RouteNode::dump("scrapyard"),
                    ],
                ),
                Route::new(
                    "mars-run",
                    vec![RouteNode::load("mars"), RouteNode::dump("scrapyard")],
                ),
            ],
            ships: vec![
                ShipSpec {
                    id: ShipId::new("hauler-1"),
                    ship_type: "shuttle".into(),
                    position: terra,
                    waste: 0,
                    route: Some(RouteId::new("inner-loop")),
                },
                ShipSpec {
                    id: ShipId::new("hauler-2"),
                    ship_type: "freighter".into(),
                    position: scrapyard,
                    waste: 0,
                    route: Some(RouteId::new("mars-run")),
                },
                ShipSpec {
                    id: ShipId::new("reserve"),
                    ship_type: "shuttle".into(),
                    position: terra,
                    waste: 0,
                    route: None,
                },
            ],
        }
    }

    /// A seeded random system. Roughly one planet in four is an empty
    /// dump; every inhabited planet gets a route to its nearest dump and
    /// ships are spread over those routes round-robin.
    pub fn random(seed: u64, planet_count: usize, ship_count: usize) -> SimResult<Self> {
        if planet_count < 2 {
            return Err(SimError::InvalidConfig(format!(
                "a random scenario needs at least 2 planets, got {planet_count}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let dump_count = (planet_count / 4).max(1);

        let mut planets = Vec::with_capacity(planet_count);
        for i in 0..planet_count {
            let orbit = 120.0 * (i as f64 + 1.0);
            let angle = rng.random_range(0.0..std::f64::consts::TAU);
            let position = Position::new(orbit * angle.cos(), orbit * angle.sin());
            let planet = if i < dump_count {
                Planet::new(format!("dump-{i}"), position, rng.random_range(800..=1_500))
                    .with_radius(15.0)
            } else {
                let capacity: u32 = rng.random_range(50..=250);
                let population = rng.random_range(5..=capacity / 2);
                let waste = rng.random_range(0..=(capacity - population).min(10));
                Planet::new(format!("planet-{i}"), position, capacity)
                    .with_population(population)
                    .with_waste(waste)
            };
            planets.push(planet);
        }

        let (dumps, inhabited) = planets.split_at(dump_count);
        let routes: Vec<Route> = inhabited
            .iter()
            .filter_map(|planet| {
                let dump = nearest(planet, dumps)?;
                Some(Route::new(
                    format!("route-{}", planet.id),
                    vec![RouteNode::load(planet.id.clone()), RouteNode::dump(dump.id.clone())],
                ))
            })
            .collect();

        // Round-robin over the routes; no routes means no ships.
        let ships = (0..ship_count)
            .zip(routes.iter().cycle())
            .map(|(j, route)| {
                let start = route
                    .nodes
                    .last()
                    .and_then(|n| planets.iter().find(|p| p.id == n.planet))
                    .map(|p| p.position)
                    .unwrap_or_default();
                let ship_type = if rng.random_bool(0.7) {
                    "shuttle"
                } else {
                    "freighter"
                };
                ShipSpec {
                    id: ShipId::new(format!("ship-{j}")),
                    ship_type: ship_type.into(),
                    position: start,
                    waste: 0,
                    route: Some(route.id.clone()),
                }
            })
            .collect();

        Ok(Self {
            money: 250.0,
            ship_types: Vec::new(),
            planets,
            routes,
            ships,
        })
    }
}

fn nearest<'a>(from: &Planet, candidates: &'a [Planet]) -> Option<&'a Planet> {
    candidates.iter().min_by(|a, b| {
        from.position
            .distance_to(&a.position)
            .total_cmp(&from.position.distance_to(&b.position))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_core::{OlError, PlanetId};

    #[test]
    fn demo_builds() {
        let world = Scenario::demo().build().unwrap();
        assert_eq!(world.planets.len(), 4);
        assert_eq!(world.routes.len(), 2);
        assert_eq!(world.ships.len(), 3);
        assert!(world.ship(&ShipId::new("reserve")).unwrap().is_idle());
    }

    #[test]
    fn random_is_deterministic() {
        let a = Scenario::random(7, 8, 5).unwrap();
        let b = Scenario::random(7, 8, 5).unwrap();
        assert_eq!(a, b);
        let c = Scenario::random(8, 8, 5).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn random_builds_valid_world() {
        for seed in 0..20 {
            let scenario = Scenario::random(seed, 9, 6).unwrap();
            let world = scenario.build().unwrap();
            assert_eq!(world.planets.len(), 9);
            assert_eq!(world.routes.len(), 7);
            assert_eq!(world.ships.len(), 6);
        }
    }

    #[test]
    fn random_needs_two_planets() {
        assert!(matches!(
            Scenario::random(1, 1, 1),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn json_round_trip_builds_same_world() {
        let json = Scenario::demo().to_json_pretty().unwrap();
        let parsed = Scenario::from_json(&json).unwrap();
        assert_eq!(parsed, Scenario::demo());
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let json = r#"{
            "money": 10,
            "planets": [
                { "id": "a", "position": { "x": 0, "y": 0 }, "capacity": 50, "population": 5 }
            ]
        }"#;
        let world = Scenario::from_json(json).unwrap().build().unwrap();
        let a = world.planet(&PlanetId::new("a")).unwrap();
        assert!((a.radius - Planet::DEFAULT_RADIUS).abs() < f64::EPSILON);
        assert_eq!(a.waste, 0);
    }

    #[test]
    fn custom_ship_type_is_registered() {
        let mut scenario = Scenario::demo();
        scenario.ship_types.push(ShipType {
            key: "barge".into(),
            name: "Barge".into(),
            ..ShipType::freighter()
        });
        scenario.ships[2].ship_type = "barge".into();
        let world = scenario.build().unwrap();
        let reserve = world.ship(&ShipId::new("reserve")).unwrap();
        assert_eq!(reserve.ship_type.name, "Barge");
    }

    #[test]
    fn unknown_ship_type_fails_build() {
        let mut scenario = Scenario::demo();
        scenario.ships[0].ship_type = "dreadnought".into();
        assert!(matches!(scenario.build(), Err(SimError::World(_))));
    }

    #[test]
    fn negative_max_speed_template_fails_build() {
        let json = r#"{
            "money": 10,
            "ship_types": [
                { "key": "wreck", "name": "Wreck", "capacity": 5, "max_speed": -3.0,
                  "acceleration": 1.0, "upkeep_cost": 1.0, "build_cost": 1.0 }
            ],
            "planets": [
                { "id": "a", "position": { "x": 0, "y": 0 }, "capacity": 50 }
            ],
            "ships": [
                { "id": "s", "ship_type": "wreck", "position": { "x": 0, "y": 0 } }
            ]
        }"#;
        let err = Scenario::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            SimError::World(OlError::InvalidShipType { ref key, .. }) if key == "wreck"
        ));
    }

    #[test]
    fn unused_bad_template_still_fails_build() {
        let mut scenario = Scenario::demo();
        scenario.ship_types.push(ShipType {
            key: "leech".into(),
            upkeep_cost: -4.0,
            ..ShipType::shuttle()
        });
        assert!(matches!(
            scenario.build(),
            Err(SimError::World(OlError::InvalidShipType { .. }))
        ));
    }

    #[test]
    fn nearest_picks_closest_candidate() {
        let from = Planet::new("home", Position::new(0.0, 0.0), 10);
        let candidates = vec![
            Planet::new("far", Position::new(100.0, 0.0), 10),
            Planet::new("near", Position::new(0.0, 5.0), 10),
        ];
        assert_eq!(nearest(&from, &candidates).unwrap().id, PlanetId::new("near"));
        assert!(nearest(&from, &[]).is_none());
    }

    #[test]
    fn malformed_json_is_scenario_error() {
        assert!(matches!(
            Scenario::from_json("{ not json"),
            Err(SimError::Scenario(_))
        ));
    }
}
