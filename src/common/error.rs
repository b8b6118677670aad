use thiserror::Error;

/// Errors raised at the edges of the engine: configuration and body lookup.
///
/// The geometric core itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("region has negative extents ({width} x {height})")]
    InvalidRegion { width: f64, height: f64 },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("restitution must be within [0, 1], got {0}")]
    InvalidRestitution(f64),

    #[error("no body with index {0}")]
    BodyNotFound(usize),

    #[error("failed to parse simulation config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
