use serde::{Deserialize, Serialize};

use super::defaults;

/// Personalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Slider value meaning "no preference".
    pub neutral: f64,
    /// Sliders within this distance of neutral are not cared about.
    pub cares_band: f64,
    /// Category scores strictly below this trip the dealbreaker.
    pub dealbreaker_floor: f64,
    /// Minimum absolute score gap for a comparison contributor.
    pub comparison_min_raw_delta: f64,
    pub comparison_max_contributors: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            neutral: defaults::DEFAULT_ALIGNMENT_NEUTRAL,
            cares_band: defaults::DEFAULT_CARES_BAND,
            dealbreaker_floor: defaults::DEFAULT_DEALBREAKER_FLOOR,
            comparison_min_raw_delta: defaults::DEFAULT_COMPARISON_MIN_RAW_DELTA,
            comparison_max_contributors: defaults::DEFAULT_COMPARISON_MAX_CONTRIBUTORS,
        }
    }
}
