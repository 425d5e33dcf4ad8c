//! Tick-based economy and navigation engine for Orbital Logistics.
//!
//! The host calls [`Simulation::advance`] (or [`tick::advance_world`]
//! directly) once per frame with the elapsed seconds. Each tick updates
//! every planet's population and waste, then moves every ship along its
//! route, transferring cargo on arrival. Anomalies are reported through
//! the [`EventLog`] and the `log` facade; a tick never fails.

/// Cargo transfer between a docked ship and a planet.
pub mod cargo;
/// Simulation clock for tracking ticks and simulated seconds.
pub mod clock;
/// Configuration types for simulation runs.
pub mod config;
/// Mutable context passed to ship steps, and per-tick totals.
pub mod context;
/// Planet population growth, waste generation, and valuation.
pub mod economy;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Ship navigation and route following.
pub mod navigation;
/// Stock, random, and JSON scenarios.
pub mod scenario;
/// Top-level simulation wrapper.
pub mod simulation;
/// Read-only state views for presentation.
pub mod snapshot;
/// The per-frame world sweep.
pub mod tick;

/// Re-exports of [`cargo::execute_ship_action`] and [`cargo::Transfer`].
pub use cargo::{Transfer, execute_ship_action};
/// Re-export of [`clock::SimClock`].
pub use clock::SimClock;
/// Re-exports of [`config::SimConfig`] and [`config::PlanetValuation`].
pub use config::{PlanetValuation, SimConfig};
/// Re-exports of [`context::SimContext`] and [`context::TickReport`].
pub use context::{SimContext, TickReport};
/// Re-exports of the planet economy operations.
pub use economy::{correct_overflow, planet_value, step_planet, world_value};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-export of [`navigation::step_ship`].
pub use navigation::step_ship;
/// Re-exports of [`scenario::Scenario`] and [`scenario::ShipSpec`].
pub use scenario::{Scenario, ShipSpec};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-exports of [`snapshot::WorldSnapshot`] and its views.
pub use snapshot::{PlanetView, ShipView, WorldSnapshot};
/// Re-export of [`tick::advance_world`].
pub use tick::advance_world;
