use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};
use crate::constants::clamp_score;
use crate::models::NormalizedWeights;

/// Trust label shown next to a category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLabel {
    High,
    Moderate,
    Low,
    NeedsVerification,
}

/// Public per-category score breakdown.
///
/// `value = base + (proof_required ? 0 : window_delta)`, clamped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownBlock {
    pub component: Category,
    pub base: f64,
    pub base_reason: String,
    pub window_delta: f64,
    pub value: f64,
    pub confidence: f64,
    pub verified_count: u32,
    pub independent_owners: u32,
    pub proof_required: bool,
    pub label: TrustLabel,
}

/// All four blocks for a brand plus the equal-weight overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub brand_id: String,
    pub blocks: CategoryMap<ScoreBreakdownBlock>,
    pub overall: f64,
    pub computed_at: DateTime<Utc>,
}

impl ScoreBreakdown {
    pub fn value(&self, category: Category) -> f64 {
        self.blocks[category].value
    }

    /// Category values keyed by category.
    pub fn values(&self) -> CategoryMap<f64> {
        self.blocks.map(|_, b| b.value)
    }

    /// Overall score blended with a user's normalized weights.
    pub fn overall_weighted(&self, weights: &NormalizedWeights) -> f64 {
        let total = weights.sum();
        if total <= 0.0 || !total.is_finite() {
            return self.overall;
        }
        let blended: f64 = self
            .blocks
            .iter()
            .map(|(c, b)| b.value * weights.get(c))
            .sum();
        clamp_score(blended / total)
    }
}
