use crate::id::{PlanetId, RouteId, ShipId};

/// Alias for `Result<T, OlError>`.
pub type OlResult<T> = Result<T, OlError>;

/// Errors that can occur while building or editing a world.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OlError {
    /// An entity with the same id already exists.
    #[error("duplicate id: \"{0}\"")]
    DuplicateId(String),

    /// The requested planet does not exist in the world.
    #[error("planet not found: {0}")]
    PlanetNotFound(PlanetId),

    /// The requested ship does not exist in the world.
    #[error("ship not found: {0}")]
    ShipNotFound(ShipId),

    /// The requested route does not exist in the world.
    #[error("route not found: {0}")]
    RouteNotFound(RouteId),

    /// A route must visit at least one planet.
    #[error("route {0} has no nodes")]
    EmptyRoute(RouteId),

    /// A planet's occupancy or geometry is out of range.
    #[error("invalid planet {id}: {reason}")]
    InvalidPlanet {
        /// The offending planet.
        id: PlanetId,
        /// What is wrong with it.
        reason: String,
    },

    /// Not enough money to pay a build cost.
    #[error("insufficient funds: need {needed:.2}, have {available:.2}")]
    InsufficientFunds {
        /// The amount required.
        needed: f64,
        /// The amount in the treasury.
        available: f64,
    },

    /// A ship template has a non-finite or negative figure.
    #[error("invalid ship type \"{key}\": {reason}")]
    InvalidShipType {
        /// The offending template key.
        key: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No ship template is registered under this key.
    #[error("unknown ship type: \"{0}\"")]
    UnknownShipType(String),
}
