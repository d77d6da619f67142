mod alignment;
mod baseline;
mod breakdown;
mod category_vector;
mod severity;
mod source_stats;
mod weights;

pub use alignment::{
    AlignmentConfidence, AlignmentResult, BrandScores, ComparisonContributor, ComparisonSummary,
    Dealbreaker, Dimension, Driver, Impact,
};
pub use baseline::{Baseline, BaselineEntry};
pub use breakdown::{ScoreBreakdown, ScoreBreakdownBlock, TrustLabel};
pub use category_vector::{window_start, CachedVector, CategoryVector};
pub use severity::{Badge, SeverityAssessment};
pub use source_stats::SourceStats;
pub use weights::{NormalizedWeights, RawWeights};
