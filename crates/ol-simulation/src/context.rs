use std::collections::BTreeMap;

use ol_core::{Planet, PlanetId, Route, RouteId};

use crate::config::SimConfig;
use crate::event::{EventLog, SimEvent, SimEventKind};

/// Money flows and arrivals accumulated over one or more ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Money earned from collected waste.
    pub income: f64,
    /// Upkeep actually debited (saturates when the treasury is empty).
    pub upkeep: f64,
    /// Ships that docked.
    pub arrivals: u32,
    /// Waste units collected from planets.
    pub waste_loaded: u64,
    /// Waste units unloaded onto planets.
    pub waste_dumped: u64,
}

impl TickReport {
    /// Fold another report into this one.
    pub fn absorb(&mut self, other: &TickReport) {
        self.income += other.income;
        self.upkeep += other.upkeep;
        self.arrivals += other.arrivals;
        self.waste_loaded += other.waste_loaded;
        self.waste_dumped += other.waste_dumped;
    }

    /// Income minus upkeep.
    pub fn net(&self) -> f64 {
        self.income - self.upkeep
    }
}

/// Mutable context passed to each ship step.
///
/// Holds every part of the world except the ship collection itself, so
/// one ship can be borrowed mutably while planets and money are updated.
pub struct SimContext<'a> {
    /// All planets, mutated by cargo transfers.
    pub planets: &'a mut BTreeMap<PlanetId, Planet>,
    /// All routes, read-only during a tick.
    pub routes: &'a BTreeMap<RouteId, Route>,
    /// The treasury.
    pub money: &'a mut f64,
    /// Economy rates.
    pub config: &'a SimConfig,
    /// Event sink.
    pub events: &'a mut EventLog,
    /// Running totals for this tick.
    pub report: &'a mut TickReport,
    /// Current tick number, stamped on emitted events.
    pub tick: u64,
}

impl SimContext<'_> {
    /// Emit a simulation event at the current tick.
    pub fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events.push(SimEvent::new(self.tick, kind, description));
    }
}
