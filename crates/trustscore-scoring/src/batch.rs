//! Parallel vector refresh across many brands.
//!
//! Brands share no state, so each refresh runs independently on the rayon
//! pool. Results come back in input order.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use trustscore_core::models::CachedVector;
use trustscore_core::Event;
use trustscore_observability::batch_span;

use crate::vector::{refresh_if_stale, VectorAggregator};

/// One brand's inputs to a batch refresh.
#[derive(Debug, Clone, Copy)]
pub struct BrandEvents<'a> {
    pub brand_id: &'a str,
    pub events: &'a [Event],
    pub cached: Option<&'a CachedVector>,
}

/// Refresh every brand's cached vector, recomputing only stale entries.
pub fn refresh_vectors(
    aggregator: &VectorAggregator,
    batch: &[BrandEvents<'_>],
    lookback_days: u32,
    stale_after_hours: u32,
    now: DateTime<Utc>,
) -> Vec<CachedVector> {
    let _span = batch_span!(batch.len()).entered();

    let refreshed: Vec<CachedVector> = batch
        .par_iter()
        .map(|brand| {
            refresh_if_stale(
                aggregator,
                brand.cached,
                brand.brand_id,
                brand.events,
                lookback_days,
                stale_after_hours,
                now,
            )
        })
        .collect();

    let recomputed = refreshed
        .iter()
        .zip(batch)
        .filter(|(fresh, brand)| {
            brand.cached.is_none_or(|c| {
                c.computed_at != fresh.computed_at || c.fingerprint != fresh.fingerprint
            })
        })
        .count();
    tracing::info!(
        brands = batch.len(),
        recomputed,
        "batch vector refresh complete"
    );

    refreshed
}
