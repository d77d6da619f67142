use trustscore_core::models::SeverityAssessment;
use trustscore_core::traits::ISeverityPolicy;
use trustscore_core::{Event, SeverityLevel};

use super::generic;

pub const SEVERE_PENALTY: f64 = 100_000.0;
pub const MODERATE_PENALTY: f64 = 25_000.0;

/// Regulatory-labor policy: tiers on violation counts and penalty amount.
///
/// - severe: `willful ≥ 2` or `penalty ≥ 100,000`
/// - moderate: `repeat ≥ 1` or `serious ≥ 3` or `penalty ≥ 25,000`
/// - minor: `serious ≥ 1`
///
/// Metrics below every tier fall through to the generic impact rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaborPolicy;

impl ISeverityPolicy for LaborPolicy {
    fn name(&self) -> &'static str {
        "regulatory_labor"
    }

    fn classify(&self, event: &Event) -> SeverityAssessment {
        let raw = &event.raw;
        if !raw.has_labor_metrics() {
            return generic::classify_by_impact(event);
        }
        let willful = raw.willful_violations.unwrap_or(0);
        let repeat = raw.repeat_violations.unwrap_or(0);
        let serious = raw.serious_violations.unwrap_or(0);
        let penalty = raw.penalty_amount.filter(|p| p.is_finite()).unwrap_or(0.0);

        let level = if willful >= 2 || penalty >= SEVERE_PENALTY {
            SeverityLevel::Severe
        } else if repeat >= 1 || serious >= 3 || penalty >= MODERATE_PENALTY {
            SeverityLevel::Moderate
        } else if serious >= 1 {
            SeverityLevel::Minor
        } else {
            return generic::classify_by_impact(event);
        };

        SeverityAssessment::new(
            level,
            format!(
                "{willful} willful, {repeat} repeat, {serious} serious violation(s); penalty ${penalty:.0}"
            ),
        )
    }
}
