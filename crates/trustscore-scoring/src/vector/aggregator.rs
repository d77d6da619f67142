use chrono::{DateTime, Utc};
use trustscore_core::config::{DecayConfig, VectorConfig};
use trustscore_core::models::{window_start, CategoryVector};
use trustscore_core::{Category, CategoryMap, Event, Orientation};
use trustscore_decay::EventWeight;
use trustscore_observability::vector_span;
use trustscore_severity::SeverityClassifier;

/// Whether an event falls inside `[now - lookback_days, now]`.
///
/// Events dated after `now` are outside the window, so replaying a past
/// `now` sees exactly what was known then.
pub fn in_window(event: &Event, now: DateTime<Utc>, lookback_days: u32) -> bool {
    let date = event.effective_date();
    date <= now && date >= window_start(now, lookback_days)
}

/// Combines a brand's events into one clamped impact vector.
///
/// ```text
/// contribution = impact × severity × credibility × verification × decay
/// value        = clamp(Σ direct + max(Σ mixed, -mixed_cap), -cap, cap)
/// ```
#[derive(Debug, Clone)]
pub struct VectorAggregator {
    classifier: SeverityClassifier,
    half_life_days: f64,
    cap: f64,
    mixed_cap: f64,
}

impl VectorAggregator {
    pub fn new(decay: &DecayConfig, vector: &VectorConfig) -> Self {
        Self {
            classifier: SeverityClassifier::new(),
            half_life_days: decay.half_life_days,
            cap: vector.cap,
            mixed_cap: vector.mixed_cap,
        }
    }

    pub fn cap(&self) -> f64 {
        self.cap
    }

    /// Events that take part in aggregation for a brand and window.
    pub fn is_eligible(
        &self,
        brand_id: &str,
        event: &Event,
        now: DateTime<Utc>,
        lookback_days: u32,
    ) -> bool {
        event.brand_id == brand_id
            && !event.is_irrelevant
            && !event.has_no_impact()
            && in_window(event, now, lookback_days)
    }

    /// Compute the category vector for `brand_id` over the lookback window.
    pub fn aggregate(
        &self,
        brand_id: &str,
        events: &[Event],
        lookback_days: u32,
        now: DateTime<Utc>,
    ) -> CategoryVector {
        let _span = vector_span!(brand_id, lookback_days).entered();

        let mut direct = CategoryMap::splat(0.0_f64);
        let mut mixed = CategoryMap::splat(0.0_f64);
        let mut used = 0usize;

        for event in events {
            if !self.is_eligible(brand_id, event, now, lookback_days) {
                continue;
            }
            let severity = self.classifier.resolve(event);
            let weight = EventWeight::compute(event, severity, now, self.half_life_days);
            let sums = if event.orientation == Orientation::Mixed {
                &mut mixed
            } else {
                &mut direct
            };
            for category in Category::ALL {
                sums[category] += weight.apply(event.impact(category));
            }
            used += 1;
        }

        let mut clamped = Vec::new();
        let values = CategoryMap::from_fn(|category| {
            // Mixed events alone may not push a category below -mixed_cap.
            let raw = direct[category] + mixed[category].max(-self.mixed_cap);
            if !raw.is_finite() {
                return 0.0;
            }
            let bounded = raw.clamp(-self.cap, self.cap);
            if bounded != raw {
                clamped.push(category);
            }
            bounded
        });

        let filtered = events.len() - used;
        tracing::debug!(
            brand_id,
            used,
            filtered,
            clamped = clamped.len(),
            "computed category vector"
        );

        CategoryVector {
            brand_id: brand_id.to_string(),
            values,
            lookback_days,
            window_start: window_start(now, lookback_days),
            window_end: now,
            events_used: used,
            events_filtered: filtered,
            clamped,
        }
    }
}

impl Default for VectorAggregator {
    fn default() -> Self {
        Self::new(&DecayConfig::default(), &VectorConfig::default())
    }
}
