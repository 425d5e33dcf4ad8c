use ol_core::World;

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::TickReport;
use crate::event::EventLog;
use crate::snapshot::WorldSnapshot;
use crate::tick::advance_world;

/// The host-facing engine.
///
/// Owns the world, clock, configuration, and event log. The host calls
/// [`Simulation::advance`] once per frame with the elapsed time and reads
/// state back through [`Simulation::world`] or [`Simulation::snapshot`].
pub struct Simulation {
    world: World,
    config: SimConfig,
    clock: SimClock,
    events: EventLog,
    totals: TickReport,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("planets", &self.world.planets.len())
            .field("ships", &self.world.ships.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create a new simulation from a world and configuration.
    pub fn new(world: World, config: SimConfig) -> Self {
        let events = EventLog::new(config.max_events);
        Self {
            world,
            config,
            clock: SimClock::new(),
            events,
            totals: TickReport::default(),
        }
    }

    /// Advance the simulation by one tick of `delta` seconds.
    /// Degenerate deltas are ignored.
    pub fn advance(&mut self, delta: f64) -> TickReport {
        if !SimClock::is_effective(delta) {
            return TickReport::default();
        }
        let tick = self.clock.advance(delta);
        let report = advance_world(&mut self.world, delta, &self.config, &mut self.events, tick);
        self.totals.absorb(&report);
        report
    }

    /// Advance the simulation by `n` ticks of `delta` seconds each.
    pub fn run(&mut self, n: u64, delta: f64) -> TickReport {
        let mut combined = TickReport::default();
        for _ in 0..n {
            combined.absorb(&self.advance(delta));
        }
        combined
    }

    /// The world as of the last tick.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the host between ticks, e.g. to reassign
    /// routes or buy ships.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Tick counter and simulated time.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Events recorded so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Totals since the simulation started.
    pub fn totals(&self) -> &TickReport {
        &self.totals
    }

    /// Read-only view of positions and quantities for presentation.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.world, self.clock.tick())
    }

    /// Extract the world, consuming the simulation.
    pub fn into_world(self) -> World {
        self.world
    }

    /// Number of effective ticks run.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }
}
