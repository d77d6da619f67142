//! # trustscore-decay
//!
//! Pure weighting primitives applied to every event before aggregation:
//! recency decay, verification factor, severity value, and credibility.
//! [`EventWeight`] multiplies them together and keeps each factor for audit.

pub mod factors;
pub mod weight;

pub use factors::credibility::credibility_factor;
pub use factors::recency::{age_days, recency_decay, recency_decay_days};
pub use factors::severity::severity_value;
pub use factors::verification::verification_factor;
pub use weight::EventWeight;
