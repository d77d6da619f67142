use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};

/// Long-horizon baseline for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub base: f64,
    pub base_reason: String,
    /// Share of historical events that mention this category, 0..1.
    pub mention_frequency: f64,
    pub mentions: usize,
}

/// Per-category baselines for a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub brand_id: String,
    pub entries: CategoryMap<BaselineEntry>,
    pub total_events: usize,
    pub horizon_start: DateTime<Utc>,
    pub horizon_end: DateTime<Utc>,
}

impl Baseline {
    pub fn base(&self, category: Category) -> f64 {
        self.entries[category].base
    }
}
