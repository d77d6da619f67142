//! Confidence index (0–100) and trust labels.
//!
//! The index is a sum of three bounded factors:
//! - verified sources, saturating at `verified_saturation`
//! - independent owners, saturating at `owner_saturation`
//! - recency, full up to `stale_after_days`, then halving every
//!   `staleness_half_life_days`
//!
//! Each factor's weight is below 100, so only a combination of several
//! recent, verified, independently owned sources approaches high confidence.

use trustscore_core::config::ConfidenceConfig;
use trustscore_core::models::{SourceStats, TrustLabel};
use trustscore_decay::recency_decay_days;

/// Confidence index for one category. Zero when the category has no events.
pub fn confidence_index(stats: &SourceStats, config: &ConfidenceConfig) -> f64 {
    if stats.total_events == 0 {
        return 0.0;
    }

    let verified = saturating_share(stats.verified_count, config.verified_saturation)
        * config.verified_weight;
    let diversity = saturating_share(stats.independent_owners, config.owner_saturation)
        * config.diversity_weight;
    let recency = recency_share(stats.days_since_last_event, config) * config.recency_weight;

    let index = verified + diversity + recency;
    if index.is_finite() {
        index.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn saturating_share(count: u32, saturation: u32) -> f64 {
    if saturation == 0 {
        return 1.0;
    }
    f64::from(count.min(saturation)) / f64::from(saturation)
}

fn recency_share(days_since_last_event: Option<f64>, config: &ConfidenceConfig) -> f64 {
    match days_since_last_event {
        None => 0.0,
        Some(days) if days <= config.stale_after_days => 1.0,
        Some(days) => recency_decay_days(
            days - config.stale_after_days,
            config.staleness_half_life_days,
        ),
    }
}

/// Trust label for a category.
///
/// `proof_required` overrides the numeric bands with `NeedsVerification`.
pub fn trust_label(confidence: f64, verification_pct: f64, proof_required: bool) -> TrustLabel {
    if proof_required {
        TrustLabel::NeedsVerification
    } else if confidence >= 80.0 && verification_pct >= 70.0 {
        TrustLabel::High
    } else if confidence >= 60.0 && verification_pct >= 50.0 {
        TrustLabel::Moderate
    } else {
        TrustLabel::Low
    }
}
