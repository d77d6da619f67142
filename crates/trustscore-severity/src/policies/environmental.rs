use trustscore_core::models::SeverityAssessment;
use trustscore_core::traits::ISeverityPolicy;
use trustscore_core::{Event, SeverityLevel};

use super::generic;

/// Regulatory-environmental policy: tiers on quarters of non-compliance.
///
/// `qnc ≥ 4` severe, `2..=3` moderate, `1` minor, `0` informational.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentalPolicy;

impl ISeverityPolicy for EnvironmentalPolicy {
    fn name(&self) -> &'static str {
        "regulatory_environmental"
    }

    fn classify(&self, event: &Event) -> SeverityAssessment {
        let Some(qnc) = event.raw.quarters_noncompliance else {
            return generic::classify_by_impact(event);
        };
        let level = match qnc {
            0 => SeverityLevel::Informational,
            1 => SeverityLevel::Minor,
            2 | 3 => SeverityLevel::Moderate,
            _ => SeverityLevel::Severe,
        };
        SeverityAssessment::new(
            level,
            format!("{qnc} quarter(s) of non-compliance"),
        )
    }
}
