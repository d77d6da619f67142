//! [`ScoringEngine`] — the library-level entry point for brand scoring.

use trustscore_core::models::{Baseline, CachedVector, CategoryVector, ScoreBreakdown, SourceStats};
use trustscore_core::{CategoryMap, Clock, Event, SystemClock, TrustConfig};

use crate::baseline::BaselineBuilder;
use crate::batch::{self, BrandEvents};
use crate::breakdown::BreakdownComposer;
use crate::source_stats::collect_source_stats;
use crate::vector::{refresh_if_stale, VectorAggregator};

/// Owns the configured pipeline stages and reads time only via its clock.
pub struct ScoringEngine<C: Clock = SystemClock> {
    config: TrustConfig,
    aggregator: VectorAggregator,
    baseline: BaselineBuilder,
    composer: BreakdownComposer,
    clock: C,
}

impl ScoringEngine<SystemClock> {
    /// Create an engine on the wall clock.
    pub fn new(config: TrustConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ScoringEngine<C> {
    /// Create an engine on an injected clock.
    pub fn with_clock(config: TrustConfig, clock: C) -> Self {
        Self {
            aggregator: VectorAggregator::new(&config.decay, &config.vector),
            baseline: BaselineBuilder::new(config.baseline.clone()),
            composer: BreakdownComposer::new(config.gate.clone(), config.confidence.clone()),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Category vector over `lookback_days` ending now.
    pub fn compute_category_vector(
        &self,
        brand_id: &str,
        events: &[Event],
        lookback_days: u32,
    ) -> CategoryVector {
        self.aggregator
            .aggregate(brand_id, events, lookback_days, self.clock.now())
    }

    /// Per-category baselines over the configured horizon ending now.
    pub fn build_baseline(&self, brand_id: &str, historical: &[Event]) -> Baseline {
        self.baseline.build(brand_id, historical, self.clock.now())
    }

    /// Source statistics over the default lookback window ending now.
    pub fn source_stats(&self, brand_id: &str, events: &[Event]) -> CategoryMap<SourceStats> {
        collect_source_stats(
            brand_id,
            events,
            self.config.vector.lookback_days,
            self.clock.now(),
        )
    }

    /// Assemble the public breakdown from already computed parts.
    pub fn compose_breakdown(
        &self,
        baseline: &Baseline,
        vector: &CategoryVector,
        source_stats: &CategoryMap<SourceStats>,
    ) -> ScoreBreakdown {
        self.composer.compose(baseline, vector, source_stats)
    }

    /// Run the full pipeline for one brand at a single instant.
    ///
    /// `recent` feeds the window vector and source statistics; `historical`
    /// feeds the baseline. The same slice may be passed for both.
    pub fn score_brand(
        &self,
        brand_id: &str,
        recent: &[Event],
        historical: &[Event],
    ) -> ScoreBreakdown {
        let now = self.clock.now();
        let lookback = self.config.vector.lookback_days;

        let vector = self.aggregator.aggregate(brand_id, recent, lookback, now);
        let stats = collect_source_stats(brand_id, recent, lookback, now);
        let baseline = self.baseline.build(brand_id, historical, now);

        let breakdown = self.composer.compose(&baseline, &vector, &stats);
        tracing::info!(brand_id, overall = breakdown.overall, "scored brand");
        breakdown
    }

    /// Return `cached` if still fresh for these events, else a new pair.
    pub fn refresh_vector(
        &self,
        cached: Option<&CachedVector>,
        brand_id: &str,
        events: &[Event],
    ) -> CachedVector {
        refresh_if_stale(
            &self.aggregator,
            cached,
            brand_id,
            events,
            self.config.vector.lookback_days,
            self.config.vector.stale_after_hours,
            self.clock.now(),
        )
    }

    /// Refresh many brands' vectors in parallel; results keep input order.
    pub fn refresh_vectors(&self, batch: &[BrandEvents<'_>]) -> Vec<CachedVector> {
        batch::refresh_vectors(
            &self.aggregator,
            batch,
            self.config.vector.lookback_days,
            self.config.vector.stale_after_hours,
            self.clock.now(),
        )
    }
}
