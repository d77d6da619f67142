use chrono::{DateTime, Utc};
use trustscore_core::models::CachedVector;
use trustscore_core::{Category, Event};

use super::VectorAggregator;

/// Fingerprint of the inputs a vector depends on.
///
/// Order-independent: events are hashed sorted by id. Any edit that can
/// change the vector (impacts, dates, verification, credibility, severity,
/// orientation, relevance, brand) changes the fingerprint.
pub fn fingerprint(events: &[Event]) -> String {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let mut hasher = blake3::Hasher::new();
    for event in sorted {
        hasher.update(event.id.as_bytes());
        hasher.update(&[0]);
        hasher.update(event.brand_id.as_bytes());
        hasher.update(&[0]);
        hasher.update(&event.effective_date().timestamp().to_le_bytes());
        for category in Category::ALL {
            hasher.update(&event.category_impacts[category].to_bits().to_le_bytes());
        }
        hasher.update(&event.credibility.to_bits().to_le_bytes());
        hasher.update(event.verification.as_str().as_bytes());
        hasher.update(&[
            u8::from(event.is_irrelevant),
            event.orientation as u8,
            event.source_kind as u8,
            event.severity.map_or(u8::MAX, |s| s as u8),
        ]);
        for metric in [
            event.raw.quarters_noncompliance,
            event.raw.willful_violations,
            event.raw.repeat_violations,
            event.raw.serious_violations,
        ] {
            hasher.update(&metric.map_or(u32::MAX, |m| m).to_le_bytes());
        }
        for amount in [event.raw.penalty_amount, event.raw.partisan_tilt_pct] {
            hasher.update(&amount.map_or(u64::MAX, f64::to_bits).to_le_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}

/// Reuse `cached` when it is fresh and was computed from the same events
/// and lookback; otherwise recompute.
///
/// The caller stores the returned pair. Concurrent refreshes of one brand are
/// harmless: the last write wins and the next refresh corrects any staleness.
pub fn refresh_if_stale(
    aggregator: &VectorAggregator,
    cached: Option<&CachedVector>,
    brand_id: &str,
    events: &[Event],
    lookback_days: u32,
    stale_after_hours: u32,
    now: DateTime<Utc>,
) -> CachedVector {
    let print = fingerprint(events);
    if let Some(existing) = cached {
        let reusable = existing.vector.brand_id == brand_id
            && existing.vector.lookback_days == lookback_days
            && existing.fingerprint == print
            && !existing.is_stale(now, stale_after_hours);
        if reusable {
            tracing::trace!(brand_id, "reusing cached category vector");
            return existing.clone();
        }
        tracing::debug!(
            brand_id,
            age_hours = existing.age_hours(now),
            "cached category vector is stale or outdated"
        );
    }

    CachedVector {
        vector: aggregator.aggregate(brand_id, events, lookback_days, now),
        computed_at: now,
        fingerprint: print,
    }
}
