use crate::event::Event;
use crate::models::SeverityAssessment;

/// A severity policy table for one kind of source.
///
/// Implementations must be total: missing raw fields fall back to the
/// generic impact-magnitude rule instead of failing.
pub trait ISeverityPolicy: Send + Sync {
    /// Short policy name, recorded in assessment reasons and logs.
    fn name(&self) -> &'static str;

    fn classify(&self, event: &Event) -> SeverityAssessment;
}
