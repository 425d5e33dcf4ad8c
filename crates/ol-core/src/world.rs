use std::collections::BTreeMap;

use crate::error::{OlError, OlResult};
use crate::id::{PlanetId, RouteId, ShipId};
use crate::planet::Planet;
use crate::route::Route;
use crate::ship::{Assignment, Ship};

/// The aggregate simulation state. Owned by the host for its whole session.
///
/// Maps are public so the tick engine can borrow them independently and
/// the host can read positions and quantities after each tick. Use the
/// `add_*` methods during setup so the invariants are checked once.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Planets keyed by id.
    pub planets: BTreeMap<PlanetId, Planet>,
    /// Ships keyed by id.
    pub ships: BTreeMap<ShipId, Ship>,
    /// Routes keyed by id.
    pub routes: BTreeMap<RouteId, Route>,
    /// The player's treasury. Never negative.
    pub money: f64,
}

impl World {
    /// An empty world with `money` in the treasury.
    pub fn new(money: f64) -> Self {
        Self {
            money: money.max(0.0),
            ..Self::default()
        }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Add a planet. Returns its id.
    pub fn add_planet(&mut self, planet: Planet) -> OlResult<PlanetId> {
        if self.planets.contains_key(&planet.id) {
            return Err(OlError::DuplicateId(planet.id.to_string()));
        }
        planet.validate()?;
        let id = planet.id.clone();
        self.planets.insert(id.clone(), planet);
        Ok(id)
    }

    /// Add a route. Every stop must name a planet already in the world.
    pub fn add_route(&mut self, route: Route) -> OlResult<RouteId> {
        if self.routes.contains_key(&route.id) {
            return Err(OlError::DuplicateId(route.id.to_string()));
        }
        if route.is_empty() {
            return Err(OlError::EmptyRoute(route.id.clone()));
        }
        if let Some(missing) = route.planets().find(|p| !self.planets.contains_key(*p)) {
            return Err(OlError::PlanetNotFound(missing.clone()));
        }
        let id = route.id.clone();
        self.routes.insert(id.clone(), route);
        Ok(id)
    }

    /// Add a ship. An assigned route must already exist.
    pub fn add_ship(&mut self, mut ship: Ship) -> OlResult<ShipId> {
        if self.ships.contains_key(&ship.id) {
            return Err(OlError::DuplicateId(ship.id.to_string()));
        }
        if let Some(route) = ship
            .assignment
            .route()
            .filter(|r| !self.routes.contains_key(*r))
        {
            return Err(OlError::RouteNotFound(route.clone()));
        }
        ship.ship_type.validate()?;
        ship.waste = ship.waste.min(ship.ship_type.capacity);
        ship.current_speed = ship.current_speed.max(0.0).min(ship.ship_type.max_speed);
        let id = ship.id.clone();
        self.ships.insert(id.clone(), ship);
        Ok(id)
    }

    /// Buy a ship: debit its template's build cost, then add it.
    pub fn purchase_ship(&mut self, ship: Ship) -> OlResult<ShipId> {
        let cost = ship.ship_type.build_cost;
        if cost > self.money {
            return Err(OlError::InsufficientFunds {
                needed: cost,
                available: self.money,
            });
        }
        let id = self.add_ship(ship)?;
        self.money = (self.money - cost).max(0.0);
        Ok(id)
    }

    /// Put a ship on a route, heading for its first stop.
    pub fn assign_route(&mut self, ship: &ShipId, route: &RouteId) -> OlResult<()> {
        if !self.routes.contains_key(route) {
            return Err(OlError::RouteNotFound(route.clone()));
        }
        let ship = self
            .ships
            .get_mut(ship)
            .ok_or_else(|| OlError::ShipNotFound(ship.clone()))?;
        ship.assign(route.clone());
        Ok(())
    }

    /// Park a ship.
    pub fn unassign_route(&mut self, ship: &ShipId) -> OlResult<()> {
        self.ships
            .get_mut(ship)
            .ok_or_else(|| OlError::ShipNotFound(ship.clone()))?
            .unassign();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get a planet by id.
    pub fn planet(&self, id: &PlanetId) -> Option<&Planet> {
        self.planets.get(id)
    }

    /// Get a planet mutably by id.
    pub fn planet_mut(&mut self, id: &PlanetId) -> Option<&mut Planet> {
        self.planets.get_mut(id)
    }

    /// Get a ship by id.
    pub fn ship(&self, id: &ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Get a ship mutably by id.
    pub fn ship_mut(&mut self, id: &ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id)
    }

    /// Get a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Ships currently flying `route`.
    pub fn ships_on_route(&self, route: &RouteId) -> Vec<&Ship> {
        self.ships
            .values()
            .filter(|s| matches!(&s.assignment, Assignment::Transiting { route: r, .. } if r == route))
            .collect()
    }

    /// Waste on every planet plus waste in every hold.
    pub fn total_waste(&self) -> u64 {
        let on_planets: u64 = self.planets.values().map(|p| u64::from(p.waste)).sum();
        let in_holds: u64 = self.ships.values().map(|s| u64::from(s.waste)).sum();
        on_planets + in_holds
    }

    /// Inhabitants across all planets.
    pub fn total_population(&self) -> u64 {
        self.planets.values().map(|p| u64::from(p.population)).sum()
    }

    /// Upkeep charged per second by the whole fleet.
    pub fn fleet_upkeep(&self) -> f64 {
        self.ships.values().map(|s| s.ship_type.upkeep_cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::Position;
    use crate::route::RouteNode;
    use crate::ship::{ShipType, ShipTypeRegistry};

    fn two_planet_world() -> World {
        let mut world = World::new(100.0);
        world
            .add_planet(Planet::new("terra", Position::new(0.0, 0.0), 100).with_waste(20))
            .unwrap();
        world
            .add_planet(Planet::new("dump", Position::new(200.0, 0.0), 500))
            .unwrap();
        world
            .add_route(Route::new(
                "haul",
                vec![RouteNode::load("terra"), RouteNode::dump("dump")],
            ))
            .unwrap();
        world
    }

    fn shuttle(id: &str) -> Ship {
        let registry = ShipTypeRegistry::standard();
        Ship::new(id, registry.require("shuttle").unwrap(), Position::default())
    }

    #[test]
    fn add_ship_rejects_bad_template() {
        let mut world = two_planet_world();
        let wreck = Arc::new(ShipType {
            max_speed: -3.0,
            ..ShipType::shuttle()
        });
        let err = world
            .add_ship(Ship::new("s1", wreck, Position::default()))
            .unwrap_err();
        assert!(matches!(err, OlError::InvalidShipType { .. }));
        assert!(world.ships.is_empty());
    }

    #[test]
    fn add_ship_clamps_speed_to_template() {
        let mut world = two_planet_world();
        let mut fast = shuttle("fast");
        fast.current_speed = 50.0;
        let mut reversing = shuttle("reversing");
        reversing.current_speed = -5.0;
        world.add_ship(fast).unwrap();
        world.add_ship(reversing).unwrap();
        assert_eq!(world.ship(&ShipId::new("fast")).unwrap().current_speed, 8.0);
        assert_eq!(world.ship(&ShipId::new("reversing")).unwrap().current_speed, 0.0);
    }

    #[test]
    fn new_world_clamps_money() {
        assert_eq!(World::new(-5.0).money, 0.0);
    }

    #[test]
    fn duplicate_planet_rejected() {
        let mut world = two_planet_world();
        let err = world
            .add_planet(Planet::new("terra", Position::default(), 10))
            .unwrap_err();
        assert_eq!(err, OlError::DuplicateId("terra".into()));
    }

    #[test]
    fn invalid_planet_rejected() {
        let mut world = World::new(0.0);
        let err = world
            .add_planet(Planet::new("tiny", Position::default(), 10).with_population(11))
            .unwrap_err();
        assert!(matches!(err, OlError::InvalidPlanet { .. }));
        assert!(world.planets.is_empty());
    }

    #[test]
    fn empty_route_rejected() {
        let mut world = two_planet_world();
        let err = world.add_route(Route::new("nowhere", vec![])).unwrap_err();
        assert_eq!(err, OlError::EmptyRoute(RouteId::new("nowhere")));
    }

    #[test]
    fn route_with_unknown_planet_rejected() {
        let mut world = two_planet_world();
        let err = world
            .add_route(Route::new("lost", vec![RouteNode::load("pluto")]))
            .unwrap_err();
        assert_eq!(err, OlError::PlanetNotFound(PlanetId::new("pluto")));
    }

    #[test]
    fn ship_with_unknown_route_rejected() {
        let mut world = two_planet_world();
        let err = world.add_ship(shuttle("s1").with_route("ghost")).unwrap_err();
        assert_eq!(err, OlError::RouteNotFound(RouteId::new("ghost")));
    }

    #[test]
    fn add_ship_clamps_cargo_to_hold() {
        let mut world = two_planet_world();
        let id = world.add_ship(shuttle("s1").with_waste(50)).unwrap();
        assert_eq!(world.ship(&id).unwrap().waste, 10);
    }

    #[test]
    fn purchase_ship_debits_build_cost() {
        let mut world = two_planet_world();
        world.purchase_ship(shuttle("s1")).unwrap();
        assert!((world.money - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn purchase_ship_needs_funds() {
        let mut world = two_planet_world();
        world.money = 5.0;
        let err = world.purchase_ship(shuttle("s1")).unwrap_err();
        assert!(matches!(err, OlError::InsufficientFunds { .. }));
        assert!(world.ships.is_empty());
        assert!((world.money - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn assign_and_unassign_route() {
        let mut world = two_planet_world();
        let id = world.add_ship(shuttle("s1")).unwrap();
        world.assign_route(&id, &RouteId::new("haul")).unwrap();
        assert_eq!(world.ships_on_route(&RouteId::new("haul")).len(), 1);
        world.unassign_route(&id).unwrap();
        assert!(world.ship(&id).unwrap().is_idle());
        assert!(world.ships_on_route(&RouteId::new("haul")).is_empty());
    }

    #[test]
    fn assign_errors() {
        let mut world = two_planet_world();
        let id = world.add_ship(shuttle("s1")).unwrap();
        assert_eq!(
            world.assign_route(&id, &RouteId::new("ghost")).unwrap_err(),
            OlError::RouteNotFound(RouteId::new("ghost"))
        );
        assert_eq!(
            world.unassign_route(&ShipId::new("nope")).unwrap_err(),
            OlError::ShipNotFound(ShipId::new("nope"))
        );
    }

    #[test]
    fn totals() {
        let mut world = two_planet_world();
        world.add_ship(shuttle("s1").with_waste(4)).unwrap();
        assert_eq!(world.total_waste(), 24);
        assert_eq!(world.total_population(), 0);
        assert!((world.fleet_upkeep() - 2.0).abs() < f64::EPSILON);
    }
}
