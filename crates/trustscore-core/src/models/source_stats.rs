use serde::{Deserialize, Serialize};

/// Evidence behind one category's window, used by confidence and gating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceStats {
    pub total_events: u32,
    /// Official plus corroborated events.
    pub verified_count: u32,
    pub official_count: u32,
    /// Distinct ownership groups among verified sources.
    pub independent_owners: u32,
    /// `None` when the category saw no events.
    pub days_since_last_event: Option<f64>,
}

impl SourceStats {
    /// Share of events that are verified, as a percentage. Zero when empty.
    pub fn verification_pct(&self) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        f64::from(self.verified_count) / f64::from(self.total_events) * 100.0
    }
}
