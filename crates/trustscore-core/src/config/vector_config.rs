use serde::{Deserialize, Serialize};

use super::defaults;

/// Category vector aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    /// Default lookback window, in days.
    pub lookback_days: u32,
    /// Each category sum is clamped to `[-cap, cap]`.
    pub cap: f64,
    /// Largest net penalty mixed-orientation events may contribute per category.
    pub mixed_cap: f64,
    /// Age after which a cached vector is stale, in hours.
    pub stale_after_hours: u32,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            cap: defaults::DEFAULT_VECTOR_CAP,
            mixed_cap: defaults::DEFAULT_MIXED_CAP,
            stale_after_hours: defaults::DEFAULT_STALE_AFTER_HOURS,
        }
    }
}
