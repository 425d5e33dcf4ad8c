use ol_core::OlError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while preparing a simulation. Ticking itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The world rejected a setup operation.
    #[error(transparent)]
    World(#[from] OlError),

    /// A scenario document could not be parsed or written.
    #[error("scenario format error: {0}")]
    Scenario(#[from] serde_json::Error),

    /// A configuration or generator parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
