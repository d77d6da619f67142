//! Breakdown composition: gated deltas, clamping, labels, and stable output.

use chrono::{DateTime, TimeZone, Utc};
use trustscore_core::config::{ConfidenceConfig, GateConfig};
use trustscore_core::models::{
    Baseline, CategoryVector, NormalizedWeights, SourceStats, TrustLabel,
};
use trustscore_core::{Category, CategoryMap};
use trustscore_scoring::{BaselineBuilder, BreakdownComposer};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn neutral_baseline() -> Baseline {
    BaselineBuilder::default().build("acme", &[], now())
}

fn vector_with(category: Category, value: f64) -> CategoryVector {
    let mut vector = CategoryVector::empty("acme", 90, now());
    vector.values[category] = value;
    vector
}

fn stats_with(category: Category, verified: u32, owners: u32) -> CategoryMap<SourceStats> {
    let mut stats: CategoryMap<SourceStats> = CategoryMap::default();
    stats[category] = SourceStats {
        total_events: verified.max(1),
        verified_count: verified,
        official_count: verified.min(1),
        independent_owners: owners,
        days_since_last_event: Some(2.0),
    };
    stats
}

#[test]
fn thin_evidence_keeps_value_at_base() {
    let mut baseline = neutral_baseline();
    baseline.entries[Category::Labor].base = 40.0;
    let breakdown = BreakdownComposer::default().compose(
        &baseline,
        &vector_with(Category::Labor, -5.0),
        &stats_with(Category::Labor, 1, 1),
    );

    let block = &breakdown.blocks[Category::Labor];
    assert!(block.proof_required);
    assert_eq!(block.window_delta, -25.0);
    assert_eq!(block.value, block.base);
    assert_eq!(block.label, TrustLabel::NeedsVerification);
}

#[test]
fn corroborated_delta_reaches_the_value() {
    let breakdown = BreakdownComposer::default().compose(
        &neutral_baseline(),
        &vector_with(Category::Environment, -2.0),
        &stats_with(Category::Environment, 3, 3),
    );
    let block = &breakdown.blocks[Category::Environment];
    assert!(!block.proof_required);
    assert_eq!(block.window_delta, -10.0);
    assert_eq!(block.value, 40.0);
    assert_eq!(block.verified_count, 3);
    assert_eq!(block.independent_owners, 3);
}

#[test]
fn values_clamp_to_score_range() {
    let composer = BreakdownComposer::new(
        GateConfig {
            delta_scale: 20.0,
            ..GateConfig::default()
        },
        ConfidenceConfig::default(),
    );
    let up = composer.compose(
        &neutral_baseline(),
        &vector_with(Category::Social, 5.0),
        &stats_with(Category::Social, 4, 4),
    );
    assert_eq!(up.value(Category::Social), 100.0);

    let down = composer.compose(
        &neutral_baseline(),
        &vector_with(Category::Social, -5.0),
        &stats_with(Category::Social, 4, 4),
    );
    assert_eq!(down.value(Category::Social), 0.0);
}

#[test]
fn categories_without_events_have_zero_confidence() {
    let breakdown = BreakdownComposer::default().compose(
        &neutral_baseline(),
        &CategoryVector::empty("acme", 90, now()),
        &CategoryMap::default(),
    );
    for category in Category::ALL {
        let block = &breakdown.blocks[category];
        assert_eq!(block.confidence, 0.0);
        assert_eq!(block.value, 50.0);
        assert_eq!(block.label, TrustLabel::Low);
        assert!(!block.proof_required);
    }
    assert_eq!(breakdown.overall, 50.0);
}

#[test]
fn overall_is_the_mean_of_values() {
    let mut baseline = neutral_baseline();
    baseline.entries[Category::Labor].base = 30.0;
    baseline.entries[Category::Environment].base = 70.0;
    baseline.entries[Category::Politics].base = 60.0;
    baseline.entries[Category::Social].base = 40.0;
    let breakdown = BreakdownComposer::default().compose(
        &baseline,
        &CategoryVector::empty("acme", 90, now()),
        &CategoryMap::default(),
    );
    assert_eq!(breakdown.overall, 50.0);

    let mut weights = NormalizedWeights::equal();
    weights.weights = CategoryMap {
        labor: 0.0,
        environment: 1.0,
        politics: 0.0,
        social: 0.0,
    };
    assert_eq!(breakdown.overall_weighted(&weights), 70.0);
}

#[test]
fn breakdown_is_stamped_with_window_end() {
    let breakdown = BreakdownComposer::default().compose(
        &neutral_baseline(),
        &CategoryVector::empty("acme", 90, now()),
        &CategoryMap::default(),
    );
    assert_eq!(breakdown.computed_at, now());
    assert_eq!(breakdown.brand_id, "acme");
}

#[test]
fn serialized_output_is_byte_stable() {
    let composer = BreakdownComposer::default();
    let baseline = neutral_baseline();
    let vector = vector_with(Category::Politics, 1.5);
    let stats = stats_with(Category::Politics, 2, 1);

    let first = serde_json::to_string(&composer.compose(&baseline, &vector, &stats)).unwrap();
    let second = serde_json::to_string(&composer.compose(&baseline, &vector, &stats)).unwrap();
    assert_eq!(first, second);

    let labor = first.find("\"labor\"").unwrap();
    let social = first.find("\"social\"").unwrap();
    assert!(labor < social, "categories serialize in declaration order");
}
