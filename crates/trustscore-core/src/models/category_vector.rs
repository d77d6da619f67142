use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};

/// Net weighted pressure on each category over a lookback window.
///
/// Every entry is finite and lies in `[-cap, cap]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVector {
    pub brand_id: String,
    pub values: CategoryMap<f64>,
    pub lookback_days: u32,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    /// Events that survived filtering and contributed.
    pub events_used: usize,
    /// Events dropped as irrelevant, zero-impact, or outside the window.
    pub events_filtered: usize,
    /// Categories whose raw sum exceeded the cap.
    pub clamped: Vec<Category>,
}

/// Start of a `days`-long window ending at `now`.
///
/// Saturates at the earliest representable instant, so any `u32` span is valid.
pub fn window_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl CategoryVector {
    /// An all-zero vector for a window with no usable events.
    pub fn empty(brand_id: &str, lookback_days: u32, now: DateTime<Utc>) -> Self {
        Self {
            brand_id: brand_id.to_string(),
            values: CategoryMap::splat(0.0),
            lookback_days,
            window_start: window_start(now, lookback_days),
            window_end: now,
            events_used: 0,
            events_filtered: 0,
            clamped: Vec::new(),
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category]
    }
}

/// A computed vector paired with when it was computed and from what.
///
/// Callers own storage of this pair; the engine only compares timestamps
/// and fingerprints handed back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedVector {
    pub vector: CategoryVector,
    pub computed_at: DateTime<Utc>,
    /// Hash of the events the vector was computed from.
    pub fingerprint: String,
}

impl CachedVector {
    /// Stale once older than `max_age_hours` (a computation from the future
    /// is treated as fresh).
    pub fn is_stale(&self, now: DateTime<Utc>, max_age_hours: u32) -> bool {
        now - self.computed_at > Duration::hours(i64::from(max_age_hours))
    }

    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        (now - self.computed_at).num_seconds().max(0) as f64 / 3600.0
    }
}
