use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment parameters.
///
/// `max_trust_level` and `max_speed` are never read by the tick operations
/// themselves; they are handed to car collaborators through
/// [`Vehicle::modify_speed`](crate::model::Vehicle::modify_speed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Chance per tick that a controlled node flips its state.
    pub toggle_probability: f64,
    pub max_trust_level: u32,
    pub max_speed: u32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            toggle_probability: 0.5,
            max_trust_level: 2,
            max_speed: 10,
        }
    }
}

impl EnvConfig {
    pub fn with_toggle_probability(toggle_probability: f64) -> Self {
        Self {
            toggle_probability,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.toggle_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.toggle_probability));
        }
        Ok(())
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration for a trace-generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Upper bound on ticks; the run stops early once every car has arrived.
    pub ticks: u32,
    pub seed: u64,
}

impl RunConfig {
    pub fn new(ticks: u32, seed: u64) -> Self {
        Self { ticks, seed }
    }
}
