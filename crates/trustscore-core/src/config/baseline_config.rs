use serde::{Deserialize, Serialize};

use super::defaults;

/// Long-horizon baseline configuration.
///
/// `score = clamp(ceiling - frequency * slope, floor, ceiling)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub horizon_days: u32,
    /// Sampling window used when citing history in `base_reason`.
    pub window_days: u32,
    pub ceiling: f64,
    pub floor: f64,
    pub slope: f64,
    /// Baseline when the brand has no history at all.
    pub neutral: f64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            horizon_days: defaults::DEFAULT_BASELINE_HORIZON_DAYS,
            window_days: defaults::DEFAULT_BASELINE_WINDOW_DAYS,
            ceiling: defaults::DEFAULT_BASELINE_CEILING,
            floor: defaults::DEFAULT_BASELINE_FLOOR,
            slope: defaults::DEFAULT_BASELINE_SLOPE,
            neutral: defaults::DEFAULT_BASELINE_NEUTRAL,
        }
    }
}
