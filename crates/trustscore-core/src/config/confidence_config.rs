use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence index configuration.
///
/// The three weights bound each factor's share of the 0–100 index; none of
/// them reaches 100 alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Days without a new event before the recency factor starts decaying.
    pub stale_after_days: f64,
    pub staleness_half_life_days: f64,
    /// Verified-source count at which that factor saturates.
    pub verified_saturation: u32,
    /// Independent-owner count at which that factor saturates.
    pub owner_saturation: u32,
    pub verified_weight: f64,
    pub diversity_weight: f64,
    pub recency_weight: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            stale_after_days: defaults::DEFAULT_CONFIDENCE_STALE_AFTER_DAYS,
            staleness_half_life_days: defaults::DEFAULT_STALENESS_HALF_LIFE_DAYS,
            verified_saturation: defaults::DEFAULT_VERIFIED_SATURATION,
            owner_saturation: defaults::DEFAULT_OWNER_SATURATION,
            verified_weight: defaults::DEFAULT_VERIFIED_WEIGHT,
            diversity_weight: defaults::DEFAULT_DIVERSITY_WEIGHT,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
        }
    }
}
