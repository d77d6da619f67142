use trustscore_core::models::SeverityAssessment;
use trustscore_core::traits::ISeverityPolicy;
use trustscore_core::{Event, SeverityLevel};

/// Impact at or below which an event is severe.
pub const SEVERE_IMPACT: f64 = -5.0;
/// Impact at or below which an event is moderate.
pub const MODERATE_IMPACT: f64 = -3.0;

/// Impact-magnitude rule on the event's dominant category.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericPolicy;

/// Map a signed impact to a level: `≤-5` severe, `≤-3` moderate, `<0` minor,
/// otherwise informational.
pub fn level_for_impact(impact: f64) -> SeverityLevel {
    if !impact.is_finite() {
        SeverityLevel::Informational
    } else if impact <= SEVERE_IMPACT {
        SeverityLevel::Severe
    } else if impact <= MODERATE_IMPACT {
        SeverityLevel::Moderate
    } else if impact < 0.0 {
        SeverityLevel::Minor
    } else {
        SeverityLevel::Informational
    }
}

/// Generic classification, shared as the fallback of every regulatory policy.
pub fn classify_by_impact(event: &Event) -> SeverityAssessment {
    match event.dominant_category() {
        Some(category) => {
            let impact = event.impact(category);
            let level = level_for_impact(impact);
            SeverityAssessment::new(
                level,
                format!("{} impact {:+.1} on {}", level, impact, category.as_str()),
            )
        }
        None => SeverityAssessment::new(SeverityLevel::Informational, "no category impact"),
    }
}

impl ISeverityPolicy for GenericPolicy {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn classify(&self, event: &Event) -> SeverityAssessment {
        classify_by_impact(event)
    }
}
