//! Simulation settings, loadable from JSON.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::math::Rect;

/// Settings for a [`Simulation`](crate::world::Simulation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Fixed step length in seconds.
    pub time_step: f64,
    /// Region every added body is bound to, unless it already has its own.
    pub region: Option<Rect>,
    /// Bounce bodies off the region walls instead of only clamping them.
    pub reflect_on_bounds: bool,
    /// Fraction of speed kept after a bounce. Range [0, 1].
    pub restitution: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_step: 1.0 / 60.0,
            region: None,
            reflect_on_bounds: true,
            restitution: 1.0,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_region(mut self, region: Rect) -> Self {
        self.region = Some(region);
        self
    }

    /// Checks the values the engine relies on but does not itself enforce.
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(EngineError::InvalidTimeStep(self.time_step));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(EngineError::InvalidRestitution(self.restitution));
        }
        if let Some(region) = self.region {
            validate_region(&region)?;
        }
        Ok(())
    }
}

/// Rejects regions with negative width or height.
pub fn validate_region(region: &Rect) -> Result<()> {
    if region.is_well_formed() {
        Ok(())
    } else {
        Err(EngineError::InvalidRegion {
            width: region.width,
            height: region.height,
        })
    }
}
