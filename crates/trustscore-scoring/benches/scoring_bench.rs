//! Criterion benchmarks for trustscore-scoring.
//!
//! Targets:
//! - Vector aggregation (500 events) < 0.2ms
//! - Full brand score (500 recent, 5K historical) < 2ms
//! - Batch refresh (100 brands × 200 events) < 20ms

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use trustscore_core::{
    CategoryMap, Event, EventSource, FixedClock, Orientation, SeverityLevel, SourceKind,
    TrustConfig, VerificationLevel,
};
use trustscore_scoring::{BrandEvents, ScoringEngine, VectorAggregator};

fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

/// Helper: a spread of events over `span_days` with varied attributes.
fn make_bench_events(brand_id: &str, count: usize, span_days: i64) -> Vec<Event> {
    let verifications = [
        VerificationLevel::Official,
        VerificationLevel::Corroborated,
        VerificationLevel::Unverified,
    ];
    let severities = [
        SeverityLevel::Informational,
        SeverityLevel::Minor,
        SeverityLevel::Moderate,
        SeverityLevel::Severe,
    ];
    (0..count)
        .map(|i| {
            let date = bench_now() - Duration::days(i as i64 % span_days.max(1));
            let sign = if i % 3 == 0 { 1.0 } else { -1.0 };
            Event {
                id: format!("{brand_id}-{i}"),
                brand_id: brand_id.to_string(),
                category_impacts: CategoryMap::from_fn(|c| sign * ((i + c as usize) % 7) as f64),
                severity: Some(severities[i % severities.len()]),
                verification: verifications[i % verifications.len()],
                credibility: 0.4 + (i % 6) as f64 / 10.0,
                event_date: Some(date),
                created_at: date,
                is_irrelevant: i % 17 == 0,
                orientation: if i % 5 == 0 {
                    Orientation::Mixed
                } else {
                    Orientation::Negative
                },
                source_kind: SourceKind::Generic,
                raw: Default::default(),
                source: Some(EventSource {
                    outlet: format!("outlet-{}", i % 11),
                    owner: Some(format!("owner-{}", i % 7)),
                }),
            }
        })
        .collect()
}

fn bench_vector(c: &mut Criterion) {
    let aggregator = VectorAggregator::default();
    let events = make_bench_events("acme", 500, 120);
    c.bench_function("vector_aggregate_500", |b| {
        b.iter(|| aggregator.aggregate(black_box("acme"), black_box(&events), 90, bench_now()))
    });
}

fn bench_score_brand(c: &mut Criterion) {
    let engine = ScoringEngine::with_clock(TrustConfig::default(), FixedClock(bench_now()));
    let recent = make_bench_events("acme", 500, 90);
    let historical = make_bench_events("acme", 5_000, 730);
    c.bench_function("score_brand_500_recent_5k_history", |b| {
        b.iter(|| engine.score_brand(black_box("acme"), black_box(&recent), black_box(&historical)))
    });
}

fn bench_batch_refresh(c: &mut Criterion) {
    let engine = ScoringEngine::with_clock(TrustConfig::default(), FixedClock(bench_now()));
    let ids: Vec<String> = (0..100).map(|i| format!("brand-{i}")).collect();
    let sets: Vec<Vec<Event>> = ids.iter().map(|id| make_bench_events(id, 200, 120)).collect();
    let batch: Vec<BrandEvents<'_>> = ids
        .iter()
        .zip(&sets)
        .map(|(id, events)| BrandEvents {
            brand_id: id,
            events,
            cached: None,
        })
        .collect();
    c.bench_function("batch_refresh_100_brands", |b| {
        b.iter(|| engine.refresh_vectors(black_box(&batch)))
    });
}

criterion_group!(benches, bench_vector, bench_score_brand, bench_batch_refresh);
criterion_main!(benches);
