use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{PlanetId, RouteId};

/// What a ship does when it docks at a route stop.
///
/// Unrecognised tags survive as `Other` so that bad scenario data reaches
/// the tick engine, which reports and skips it instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Take waste from the planet into the hold.
    LoadWaste,
    /// Unload waste from the hold onto the planet.
    DumpWaste,
    /// An action this engine does not understand.
    #[serde(untagged)]
    Other(String),
}

impl Action {
    /// Parse an action tag such as `LOAD_WASTE`. Matching is case-insensitive
    /// and accepts `-` in place of `_`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "LOAD_WASTE" => Self::LoadWaste,
            "DUMP_WASTE" => Self::DumpWaste,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadWaste => write!(f, "LOAD_WASTE"),
            Self::DumpWaste => write!(f, "DUMP_WASTE"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// One stop on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    /// The planet to fly to.
    pub planet: PlanetId,
    /// What to do on arrival.
    pub action: Action,
}

impl RouteNode {
    /// Create a route stop.
    pub fn new(planet: impl Into<PlanetId>, action: Action) -> Self {
        Self {
            planet: planet.into(),
            action,
        }
    }

    /// Stop that loads waste at `planet`.
    pub fn load(planet: impl Into<PlanetId>) -> Self {
        Self::new(planet, Action::LoadWaste)
    }

    /// Stop that dumps waste at `planet`.
    pub fn dump(planet: impl Into<PlanetId>) -> Self {
        Self::new(planet, Action::DumpWaste)
    }
}

/// An ordered patrol cycle. Ships visit the nodes in sequence and wrap
/// around after the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier.
    pub id: RouteId,
    /// Stops in visiting order.
    pub nodes: Vec<RouteNode>,
}

impl Route {
    /// Create a route from its stops.
    pub fn new(id: impl Into<RouteId>, nodes: Vec<RouteNode>) -> Self {
        Self {
            id: id.into(),
            nodes,
        }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The stop at `index`, if in bounds.
    pub fn node(&self, index: usize) -> Option<&RouteNode> {
        self.nodes.get(index)
    }

    /// Index of the stop after `index`, wrapping to the start.
    pub fn next_index(&self, index: usize) -> usize {
        if self.nodes.is_empty() {
            0
        } else {
            (index + 1) % self.nodes.len()
        }
    }

    /// Iterate the planets this route visits, in order.
    pub fn planets(&self) -> impl Iterator<Item = &PlanetId> {
        self.nodes.iter().map(|n| &n.planet)
    }
}
