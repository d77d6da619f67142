//! Window delta and the proof-required gate.

use serde::{Deserialize, Serialize};
use trustscore_core::config::GateConfig;
use trustscore_core::models::SourceStats;

/// A category's window delta and whether it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    /// Delta in score points; always computed, even when muted.
    pub window_delta: f64,
    pub proof_required: bool,
}

impl GateDecision {
    /// The part of the delta that reaches the displayed value.
    pub fn applied_delta(&self) -> f64 {
        if self.proof_required {
            0.0
        } else {
            self.window_delta
        }
    }
}

/// Linear map from a category vector value to score points, same sign.
pub fn window_delta(vector_value: f64, delta_scale: f64) -> f64 {
    let delta = vector_value * delta_scale;
    if delta.is_finite() {
        delta
    } else {
        0.0
    }
}

/// Proof is required when a material delta rests on thin evidence: fewer
/// verified sources than required and fewer independent owners than required.
pub fn requires_proof(window_delta: f64, stats: &SourceStats, config: &GateConfig) -> bool {
    let material = window_delta.abs() >= config.min_material_delta && window_delta != 0.0;
    let thin = stats.verified_count < config.min_verified_sources
        && stats.independent_owners < config.min_independent_owners;
    material && thin
}

/// Compute the delta for a vector value and decide whether it is muted.
pub fn evaluate(vector_value: f64, stats: &SourceStats, config: &GateConfig) -> GateDecision {
    let delta = window_delta(vector_value, config.delta_scale);
    GateDecision {
        window_delta: delta,
        proof_required: requires_proof(delta, stats, config),
    }
}
