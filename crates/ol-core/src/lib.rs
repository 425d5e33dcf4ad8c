//! Core types for Orbital Logistics: planets, ships, routes, and the world model.
//!
//! This crate is passive data. It knows how to validate and store a
//! scenario but never advances time; the tick rules live in
//! `ol-simulation`. A [`World`] is built programmatically by the host and
//! then mutated in place by the engine.

/// Error types used throughout the crate.
pub mod error;
/// 2D coordinates and distance helpers.
pub mod geometry;
/// Caller-chosen identifiers for planets, ships, and routes.
pub mod id;
/// Planets: population, waste, and capacity.
pub mod planet;
/// Patrol routes and the actions performed at each stop.
pub mod route;
/// Ship templates, the template registry, and ships themselves.
pub mod ship;
/// The aggregate world state owned by the host.
pub mod world;

/// Re-export error types.
pub use error::{OlError, OlResult};
/// Re-export geometry types.
pub use geometry::Position;
/// Re-export identifier types.
pub use id::{PlanetId, RouteId, ShipId};
/// Re-export planet type.
pub use planet::Planet;
/// Re-export route types.
pub use route::{Action, Route, RouteNode};
/// Re-export ship types.
pub use ship::{Assignment, Ship, ShipType, ShipTypeRegistry};
/// Re-export world type.
pub use world::World;
