use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trustscore_core::{Event, SeverityLevel};

use crate::factors;

/// Multiplicative weight applied to an event's impacts.
///
/// ```text
/// weight = severity × credibility × verification × recencyDecay
/// ```
///
/// Each factor is kept for audit logging. `combined` lies in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventWeight {
    pub severity: f64,
    pub credibility: f64,
    pub verification: f64,
    pub decay: f64,
    pub combined: f64,
}

impl EventWeight {
    /// Weight an event whose severity level has already been resolved.
    pub fn compute(
        event: &Event,
        severity: SeverityLevel,
        now: DateTime<Utc>,
        half_life_days: f64,
    ) -> Self {
        let severity = factors::severity::severity_value(Some(severity.tier()));
        let credibility = factors::credibility::credibility_factor(event.credibility);
        let verification = factors::verification::verification_factor(event.verification);
        let decay = factors::recency::recency_decay(event.effective_date(), now, half_life_days);

        let combined = (severity * credibility * verification * decay).clamp(0.0, 1.0);

        Self {
            severity,
            credibility,
            verification,
            decay,
            combined,
        }
    }

    /// Weighted contribution of a signed impact.
    pub fn apply(&self, impact: f64) -> f64 {
        if impact.is_finite() {
            impact * self.combined
        } else {
            0.0
        }
    }
}
