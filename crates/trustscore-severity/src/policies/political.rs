use trustscore_core::models::SeverityAssessment;
use trustscore_core::traits::ISeverityPolicy;
use trustscore_core::{Event, SeverityLevel};

use super::generic;

/// Regulatory-political policy: tiers on partisan tilt of political giving.
///
/// `≥85%` severe, `≥70%` moderate, `≥55%` minor; a lower tilt falls through
/// to the generic impact rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoliticalPolicy;

impl ISeverityPolicy for PoliticalPolicy {
    fn name(&self) -> &'static str {
        "regulatory_political"
    }

    fn classify(&self, event: &Event) -> SeverityAssessment {
        let Some(tilt) = event.raw.partisan_tilt_pct.filter(|t| t.is_finite()) else {
            return generic::classify_by_impact(event);
        };
        let level = if tilt >= 85.0 {
            SeverityLevel::Severe
        } else if tilt >= 70.0 {
            SeverityLevel::Moderate
        } else if tilt >= 55.0 {
            SeverityLevel::Minor
        } else {
            return generic::classify_by_impact(event);
        };
        SeverityAssessment::new(level, format!("{tilt:.0}% partisan tilt in political giving"))
    }
}
