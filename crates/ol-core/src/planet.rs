use serde::{Deserialize, Serialize};

use crate::error::{OlError, OlResult};
use crate::geometry::Position;
use crate::id::PlanetId;

/// A planet: a fixed number of slots shared between inhabitants and waste.
///
/// `population + waste <= capacity` holds at every observable instant.
/// The two `growing_*` accumulators carry sub-integer progress between
/// ticks so slow rates are not lost to truncation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Unique, immutable identifier.
    pub id: PlanetId,
    /// Resolved coordinate at tick time.
    pub position: Position,
    /// Arrival threshold: a ship closer than this has docked.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Total population + waste slots.
    pub capacity: u32,
    /// Current inhabitants.
    #[serde(default)]
    pub population: u32,
    /// Current waste units.
    #[serde(default)]
    pub waste: u32,
    /// Fractional population growth carried to the next tick, in `[0, 1)`.
    #[serde(default)]
    pub growing_pop: f64,
    /// Fractional waste generation carried to the next tick, in `[0, 1)`.
    #[serde(default)]
    pub growing_waste: f64,
}

fn default_radius() -> f64 {
    Planet::DEFAULT_RADIUS
}

impl Planet {
    /// Arrival radius used when none is given.
    pub const DEFAULT_RADIUS: f64 = 10.0;

    /// Create an empty planet.
    pub fn new(id: impl Into<PlanetId>, position: Position, capacity: u32) -> Self {
        Self {
            id: id.into(),
            position,
            radius: Self::DEFAULT_RADIUS,
            capacity,
            population: 0,
            waste: 0,
            growing_pop: 0.0,
            growing_waste: 0.0,
        }
    }

    /// Set the starting population.
    pub fn with_population(mut self, population: u32) -> Self {
        self.population = population;
        self
    }

    /// Set the starting waste.
    pub fn with_waste(mut self, waste: u32) -> Self {
        self.waste = waste;
        self
    }

    /// Set the arrival radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Slots not taken by inhabitants or waste.
    pub fn free_capacity(&self) -> u32 {
        self.capacity
            .saturating_sub(self.population)
            .saturating_sub(self.waste)
    }

    /// Slots that could still receive waste, ignoring inhabitants.
    pub fn waste_room(&self) -> u32 {
        self.capacity.saturating_sub(self.waste)
    }

    /// `true` if population and waste together fill every slot.
    pub fn is_full(&self) -> bool {
        self.population.saturating_add(self.waste) >= self.capacity
    }

    /// Check the occupancy and geometry invariants.
    pub fn validate(&self) -> OlResult<()> {
        let invalid = |reason: &str| OlError::InvalidPlanet {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.capacity == 0 {
            return Err(invalid("capacity must be greater than zero"));
        }
        if u64::from(self.population) + u64::from(self.waste) > u64::from(self.capacity) {
            return Err(invalid("population + waste exceeds capacity"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius must be a positive finite number"));
        }
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(invalid("position must be finite"));
        }
        if !(0.0..1.0).contains(&self.growing_pop) {
            return Err(invalid("growing_pop must lie in [0, 1)"));
        }
        if !(0.0..1.0).contains(&self.growing_waste) {
            return Err(invalid("growing_waste must lie in [0, 1)"));
        }
        Ok(())
    }
}
