use serde::{Deserialize, Serialize};

use super::defaults;

/// Window-delta scaling and proof-required gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Score points per unit of category vector value.
    pub delta_scale: f64,
    /// Deltas smaller than this (absolute) never trigger the gate.
    pub min_material_delta: f64,
    /// Verified sources needed to apply a delta.
    pub min_verified_sources: u32,
    /// Independent ownership groups needed to apply a delta.
    pub min_independent_owners: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            delta_scale: defaults::DEFAULT_DELTA_SCALE,
            min_material_delta: defaults::DEFAULT_MIN_MATERIAL_DELTA,
            min_verified_sources: defaults::DEFAULT_MIN_VERIFIED_SOURCES,
            min_independent_owners: defaults::DEFAULT_MIN_INDEPENDENT_OWNERS,
        }
    }
}
