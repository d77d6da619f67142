//! Per-category evidence statistics for confidence and proof gating.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use trustscore_core::models::SourceStats;
use trustscore_core::{Category, CategoryMap, Event, VerificationLevel};
use trustscore_decay::age_days;

use crate::vector::in_window;

/// Collect source statistics per category over the lookback window.
///
/// An event counts toward a category when it is relevant, inside the window,
/// belongs to `brand_id`, and has a non-zero impact on that category.
pub fn collect_source_stats(
    brand_id: &str,
    events: &[Event],
    lookback_days: u32,
    now: DateTime<Utc>,
) -> CategoryMap<SourceStats> {
    let mut stats: CategoryMap<SourceStats> = CategoryMap::default();
    let mut owners: CategoryMap<BTreeSet<String>> = CategoryMap::default();

    let relevant = events.iter().filter(|e| {
        e.brand_id == brand_id && !e.is_irrelevant && in_window(e, now, lookback_days)
    });

    for event in relevant {
        let age = age_days(event.effective_date(), now);
        for category in Category::ALL {
            if !event.mentions(category) {
                continue;
            }
            let entry = &mut stats[category];
            entry.total_events += 1;
            if event.verification.is_verified() {
                entry.verified_count += 1;
                if let Some(source) = &event.source {
                    owners[category].insert(source.owner_key());
                }
            }
            if event.verification == VerificationLevel::Official {
                entry.official_count += 1;
            }
            entry.days_since_last_event = Some(match entry.days_since_last_event {
                Some(current) => current.min(age),
                None => age,
            });
        }
    }

    for category in Category::ALL {
        stats[category].independent_owners = owners[category].len() as u32;
    }
    stats
}
