//! Assembles baseline, window delta, confidence, and proof flag into the
//! public per-category breakdown.

use trustscore_core::config::{ConfidenceConfig, GateConfig};
use trustscore_core::constants::clamp_score;
use trustscore_core::models::{
    Baseline, CategoryVector, ScoreBreakdown, ScoreBreakdownBlock, SourceStats,
};
use trustscore_core::CategoryMap;
use trustscore_observability::breakdown_span;

use crate::confidence::{confidence_index, trust_label};
use crate::gate;

/// Composes [`ScoreBreakdown`]s. Pure: identical inputs give identical output.
#[derive(Debug, Clone, Default)]
pub struct BreakdownComposer {
    gate: GateConfig,
    confidence: ConfidenceConfig,
}

impl BreakdownComposer {
    pub fn new(gate: GateConfig, confidence: ConfidenceConfig) -> Self {
        Self { gate, confidence }
    }

    /// Build one block per category and the equal-weight overall score.
    ///
    /// The breakdown is stamped with the vector's `window_end`, the `now`
    /// the vector was computed for.
    pub fn compose(
        &self,
        baseline: &Baseline,
        vector: &CategoryVector,
        source_stats: &CategoryMap<SourceStats>,
    ) -> ScoreBreakdown {
        let _span = breakdown_span!(baseline.brand_id).entered();

        let blocks = CategoryMap::from_fn(|category| {
            let entry = &baseline.entries[category];
            let stats = &source_stats[category];
            let decision = gate::evaluate(vector.get(category), stats, &self.gate);
            let confidence = confidence_index(stats, &self.confidence);

            if decision.proof_required {
                tracing::debug!(
                    brand_id = %baseline.brand_id,
                    category = category.as_str(),
                    window_delta = decision.window_delta,
                    verified = stats.verified_count,
                    owners = stats.independent_owners,
                    "window delta muted until independently confirmed"
                );
            }

            ScoreBreakdownBlock {
                component: category,
                base: entry.base,
                base_reason: entry.base_reason.clone(),
                window_delta: decision.window_delta,
                value: clamp_score(entry.base + decision.applied_delta()),
                confidence,
                verified_count: stats.verified_count,
                independent_owners: stats.independent_owners,
                proof_required: decision.proof_required,
                label: trust_label(confidence, stats.verification_pct(), decision.proof_required),
            }
        });

        let overall = clamp_score(blocks.iter().map(|(_, b)| b.value).sum::<f64>() / 4.0);

        ScoreBreakdown {
            brand_id: baseline.brand_id.clone(),
            blocks,
            overall,
            computed_at: vector.window_end,
        }
    }
}
