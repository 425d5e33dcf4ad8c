use ol_core::{PlanetId, RouteId, ShipId};

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    // Navigation
    /// A ship docked at a route stop.
    Arrived {
        /// The ship that arrived.
        ship: ShipId,
        /// The planet it docked at.
        planet: PlanetId,
    },
    /// A stale route cursor was reset to the first stop.
    RouteCursorReset {
        /// The ship whose cursor was reset.
        ship: ShipId,
        /// The route being flown.
        route: RouteId,
        /// The out-of-range index that was discarded.
        stale_index: usize,
    },

    // Cargo
    /// Waste moved from a planet into a ship's hold.
    WasteLoaded {
        /// The collecting ship.
        ship: ShipId,
        /// The planet waste was taken from.
        planet: PlanetId,
        /// Units transferred.
        amount: u32,
    },
    /// Waste moved from a ship's hold onto a planet.
    WasteDumped {
        /// The unloading ship.
        ship: ShipId,
        /// The planet receiving the waste.
        planet: PlanetId,
        /// Units transferred.
        amount: u32,
    },

    // Planets
    /// Waste pushed inhabitants off a planet.
    PopulationDisplaced {
        /// The overcrowded planet.
        planet: PlanetId,
        /// Inhabitants removed.
        amount: u32,
    },

    // Economy
    /// Upkeep drained the treasury to zero.
    Bankrupt {
        /// The ship whose upkeep emptied the treasury.
        ship: ShipId,
    },

    // Anomalies
    /// A route stop named an action the engine does not know.
    InvalidAction {
        /// The ship that docked.
        ship: ShipId,
        /// The planet it docked at.
        planet: PlanetId,
        /// The unrecognised action tag.
        action: String,
    },
    /// A ship is assigned to a route that is not in the world.
    MissingRoute {
        /// The stranded ship.
        ship: ShipId,
        /// The unknown route.
        route: RouteId,
    },
    /// A route stop names a planet that is not in the world.
    MissingPlanet {
        /// The ship heading there.
        ship: ShipId,
        /// The unknown planet.
        planet: PlanetId,
    },
}

impl SimEventKind {
    /// The ship this event concerns, if any.
    pub fn ship(&self) -> Option<&ShipId> {
        match self {
            Self::Arrived { ship, .. }
            | Self::RouteCursorReset { ship, .. }
            | Self::WasteLoaded { ship, .. }
            | Self::WasteDumped { ship, .. }
            | Self::Bankrupt { ship }
            | Self::InvalidAction { ship, .. }
            | Self::MissingRoute { ship, .. }
            | Self::MissingPlanet { ship, .. } => Some(ship),
            Self::PopulationDisplaced { .. } => None,
        }
    }

    /// The planet this event concerns, if any.
    pub fn planet(&self) -> Option<&PlanetId> {
        match self {
            Self::Arrived { planet, .. }
            | Self::WasteLoaded { planet, .. }
            | Self::WasteDumped { planet, .. }
            | Self::PopulationDisplaced { planet, .. }
            | Self::InvalidAction { planet, .. }
            | Self::MissingPlanet { planet, .. } => Some(planet),
            Self::RouteCursorReset { .. } | Self::Bankrupt { .. } | Self::MissingRoute { .. } => {
                None
            }
        }
    }

    /// `true` for events that signal bad input rather than normal play.
    pub fn is_anomaly(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction { .. } | Self::MissingRoute { .. } | Self::MissingPlanet { .. }
        )
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The simulation tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given tick, kind, and description.
    pub fn new(tick: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return all events concerning the given ship.
    pub fn events_for_ship(&self, id: &ShipId) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.ship() == Some(id))
            .collect()
    }

    /// Return all events concerning the given planet.
    pub fn events_for_planet(&self, id: &PlanetId) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.planet() == Some(id))
            .collect()
    }

    /// Return every anomaly reported so far.
    pub fn anomalies(&self) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.kind.is_anomaly()).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
