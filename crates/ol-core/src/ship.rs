use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{OlError, OlResult};
use crate::geometry::Position;
use crate::id::{RouteId, ShipId};

/// An immutable ship template. Ships share one via [`Arc`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipType {
    /// Stable registry key, e.g. `shuttle`.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Maximum waste units in the hold.
    pub capacity: u32,
    /// Top speed in units per second.
    pub max_speed: f64,
    /// Speed gained per second while under way.
    pub acceleration: f64,
    /// Money charged per second of operation.
    pub upkeep_cost: f64,
    /// Money charged once when the ship is bought.
    pub build_cost: f64,
}

impl ShipType {
    /// The small, quick stock hauler.
    pub fn shuttle() -> Self {
        Self {
            key: "shuttle".into(),
            name: "Shuttle".into(),
            capacity: 10,
            max_speed: 8.0,
            acceleration: 5.0,
            upkeep_cost: 2.0,
            build_cost: 10.0,
        }
    }

    /// The bulk stock hauler.
    pub fn freighter() -> Self {
        Self {
            key: "freighter".into(),
            name: "Freighter".into(),
            capacity: 100,
            max_speed: 25.0,
            acceleration: 2.0,
            upkeep_cost: 5.0,
            build_cost: 50.0,
        }
    }

    /// Check that every figure is finite and none is negative.
    pub fn validate(&self) -> OlResult<()> {
        let fields = [
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("upkeep_cost", self.upkeep_cost),
            ("build_cost", self.build_cost),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(OlError::InvalidShipType {
                    key: self.key.clone(),
                    reason: format!("{name} must be a finite non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Read-only catalogue of ship templates, keyed by [`ShipType::key`].
#[derive(Debug, Clone, Default)]
pub struct ShipTypeRegistry {
    types: BTreeMap<String, Arc<ShipType>>,
}

impl ShipTypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalogue: shuttle and freighter.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ShipType::shuttle());
        registry.register(ShipType::freighter());
        registry
    }

    /// Add a template, replacing any previous one with the same key.
    /// Ships already holding the old handle keep it unchanged.
    pub fn register(&mut self, ship_type: ShipType) -> Arc<ShipType> {
        let handle = Arc::new(ship_type);
        self.types.insert(handle.key.clone(), Arc::clone(&handle));
        handle
    }

    /// Look up a template handle.
    pub fn get(&self, key: &str) -> Option<Arc<ShipType>> {
        self.types.get(key).cloned()
    }

    /// Look up a template handle, failing on unknown keys.
    pub fn require(&self, key: &str) -> OlResult<Arc<ShipType>> {
        self.get(key)
            .ok_or_else(|| OlError::UnknownShipType(key.to_string()))
    }

    /// Iterate templates in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ShipType>> {
        self.types.values()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Whether a ship is parked or flying a patrol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Assignment {
    /// No route: the ship holds position with zero speed.
    #[default]
    Idle,
    /// Flying `route`, currently headed for stop `node_index`.
    Transiting {
        /// The patrol being flown.
        route: RouteId,
        /// Route cursor: index of the stop being approached.
        node_index: usize,
    },
}

impl Assignment {
    /// The assigned route, if any.
    pub fn route(&self) -> Option<&RouteId> {
        match self {
            Self::Idle => None,
            Self::Transiting { route, .. } => Some(route),
        }
    }

    /// The route cursor, if transiting.
    pub fn node_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Transiting { node_index, .. } => Some(*node_index),
        }
    }
}

/// A waste hauler.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Unique identifier.
    pub id: ShipId,
    /// Shared, immutable template.
    pub ship_type: Arc<ShipType>,
    /// Current location.
    pub position: Position,
    /// Facing angle in radians.
    pub direction: f64,
    /// Speed in units per second, `0 ..= ship_type.max_speed`.
    pub current_speed: f64,
    /// Waste in the hold, `0 ..= ship_type.capacity`.
    pub waste: u32,
    /// Patrol state.
    pub assignment: Assignment,
}

impl Ship {
    /// Create an idle, empty ship at rest.
    pub fn new(id: impl Into<ShipId>, ship_type: Arc<ShipType>, position: Position) -> Self {
        Self {
            id: id.into(),
            ship_type,
            position,
            direction: 0.0,
            current_speed: 0.0,
            waste: 0,
            assignment: Assignment::Idle,
        }
    }

    /// Set the starting cargo.
    pub fn with_waste(mut self, waste: u32) -> Self {
        self.waste = waste;
        self
    }

    /// Start on `route` at its first stop.
    pub fn with_route(mut self, route: impl Into<RouteId>) -> Self {
        self.assign(route.into());
        self
    }

    /// Put the ship on a patrol, heading for the first stop.
    pub fn assign(&mut self, route: RouteId) {
        self.assignment = Assignment::Transiting {
            route,
            node_index: 0,
        };
    }

    /// Park the ship.
    pub fn unassign(&mut self) {
        self.assignment = Assignment::Idle;
        self.current_speed = 0.0;
    }

    /// `true` if no route is assigned.
    pub fn is_idle(&self) -> bool {
        matches!(self.assignment, Assignment::Idle)
    }

    /// Hold space still available.
    pub fn free_capacity(&self) -> u32 {
        self.ship_type.capacity.saturating_sub(self.waste)
    }
}
