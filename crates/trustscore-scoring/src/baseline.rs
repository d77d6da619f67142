//! Long-horizon baseline from category mention frequency.
//!
//! `score = clamp(ceiling - frequency × slope, floor, ceiling)`: a category
//! never mentioned sits at the ceiling, one mentioned by every event sits at
//! the floor. Baselines stay inside that band; only window deltas reach the
//! extremes.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use trustscore_core::config::BaselineConfig;
use trustscore_core::models::{window_start, Baseline, BaselineEntry};
use trustscore_core::{Category, CategoryMap, Event};
use trustscore_decay::age_days;
use trustscore_observability::baseline_span;

use crate::vector::in_window;

/// Builds per-category baselines from a brand's event history.
#[derive(Debug, Clone, Default)]
pub struct BaselineBuilder {
    config: BaselineConfig,
}

impl BaselineBuilder {
    pub fn new(config: BaselineConfig) -> Self {
        Self { config }
    }

    /// Map a mention frequency (0..1) to a baseline score.
    pub fn score_for_frequency(&self, frequency: f64) -> f64 {
        let frequency = if frequency.is_finite() {
            frequency.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (self.config.ceiling - frequency * self.config.slope)
            .clamp(self.config.floor, self.config.ceiling)
    }

    /// Build baselines over the configured horizon ending at `now`.
    pub fn build(&self, brand_id: &str, historical: &[Event], now: DateTime<Utc>) -> Baseline {
        let horizon = self.config.horizon_days;
        let history: Vec<&Event> = historical
            .iter()
            .filter(|e| {
                e.brand_id == brand_id
                    && !e.is_irrelevant
                    && !e.has_no_impact()
                    && in_window(e, now, horizon)
            })
            .collect();

        let _span = baseline_span!(brand_id, history.len()).entered();

        let horizon_start = window_start(now, horizon);
        let total = history.len();

        let entries = CategoryMap::from_fn(|category| {
            if total == 0 {
                return BaselineEntry {
                    base: self.config.neutral,
                    base_reason: format!(
                        "No events in the last {} months; neutral baseline",
                        self.horizon_months()
                    ),
                    mention_frequency: 0.0,
                    mentions: 0,
                };
            }

            let mut windows = BTreeSet::new();
            let mut mentions = 0usize;
            for event in history.iter().filter(|e| e.mentions(category)) {
                mentions += 1;
                let age = age_days(event.effective_date(), now);
                windows.insert((age / f64::from(self.config.window_days)).floor() as u32);
            }
            let frequency = mentions as f64 / total as f64;

            BaselineEntry {
                base: self.score_for_frequency(frequency),
                base_reason: self.reason(
                    category,
                    mentions,
                    total,
                    windows.len(),
                    horizon_start,
                    now,
                ),
                mention_frequency: frequency,
                mentions,
            }
        });

        tracing::debug!(brand_id, total, "built baseline");

        Baseline {
            brand_id: brand_id.to_string(),
            entries,
            total_events: total,
            horizon_start,
            horizon_end: now,
        }
    }

    fn horizon_months(&self) -> u32 {
        (f64::from(self.config.horizon_days) / 30.44).round() as u32
    }

    fn reason(
        &self,
        category: Category,
        mentions: usize,
        total: usize,
        active_windows: usize,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> String {
        format!(
            "{} mentioned in {} of {} events across {} of {} {}-day windows, {} months of history ({} – {})",
            category.display_name(),
            mentions,
            total,
            active_windows,
            self.config.horizon_days.div_ceil(self.config.window_days),
            self.config.window_days,
            self.horizon_months(),
            start.format("%b %Y"),
            end.format("%b %Y"),
        )
    }
}
