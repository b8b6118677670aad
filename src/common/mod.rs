pub mod config;
pub mod error;

pub use config::{validate_region, SimulationConfig};
pub use error::{EngineError, Result};
