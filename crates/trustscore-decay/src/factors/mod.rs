pub mod credibility;
pub mod recency;
pub mod severity;
pub mod verification;
