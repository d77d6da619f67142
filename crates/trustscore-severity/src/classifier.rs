//! Dispatch from [`SourceKind`] to its policy table.

use trustscore_core::models::SeverityAssessment;
use trustscore_core::traits::ISeverityPolicy;
use trustscore_core::{Event, SeverityLevel, SourceKind};

use crate::policies::{EnvironmentalPolicy, GenericPolicy, LaborPolicy, PoliticalPolicy};

/// Routes each event to the policy for its source kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityClassifier {
    environmental: EnvironmentalPolicy,
    labor: LaborPolicy,
    political: PoliticalPolicy,
    generic: GenericPolicy,
}

impl SeverityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The policy table for a source kind. `Generic` is the fallback branch.
    pub fn policy_for(&self, kind: SourceKind) -> &dyn ISeverityPolicy {
        match kind {
            SourceKind::RegulatoryEnvironmental => &self.environmental,
            SourceKind::RegulatoryLabor => &self.labor,
            SourceKind::RegulatoryPolitical => &self.political,
            SourceKind::Generic => &self.generic,
        }
    }

    /// Classify an event from its raw attributes, ignoring any declared level.
    pub fn classify(&self, event: &Event) -> SeverityAssessment {
        let policy = self.policy_for(event.source_kind);
        let assessment = policy.classify(event);
        tracing::trace!(
            event_id = %event.id,
            policy = policy.name(),
            level = %assessment.level,
            "classified event severity"
        );
        assessment
    }

    /// The declared severity if present, otherwise the classified one.
    pub fn resolve(&self, event: &Event) -> SeverityLevel {
        match event.severity {
            Some(level) => level,
            None => self.classify(event).level,
        }
    }
}
