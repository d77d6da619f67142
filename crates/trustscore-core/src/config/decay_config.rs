use serde::{Deserialize, Serialize};

use super::defaults;

/// Recency decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Half-life of an event's weight, in days.
    pub half_life_days: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
        }
    }
}
