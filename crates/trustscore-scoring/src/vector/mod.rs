//! Category vector aggregation and the cached `(vector, computed_at)` pair.

mod aggregator;
mod cache;

pub use aggregator::{in_window, VectorAggregator};
pub use cache::{fingerprint, refresh_if_stale};
