use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use trustscore_core::models::SourceStats;
use trustscore_core::config::ConfidenceConfig;
use trustscore_core::{
    Category, CategoryMap, Event, EventSource, FixedClock, Orientation, SeverityLevel,
    SourceKind, TrustConfig, VerificationLevel,
};
use trustscore_scoring::confidence::confidence_index;
use trustscore_scoring::{fingerprint, ScoringEngine, VectorAggregator};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn verification() -> impl Strategy<Value = VerificationLevel> {
    prop_oneof![
        Just(VerificationLevel::Official),
        Just(VerificationLevel::Corroborated),
        Just(VerificationLevel::Unverified),
        Just(VerificationLevel::Unknown),
    ]
}

fn severity() -> impl Strategy<Value = Option<SeverityLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(SeverityLevel::Informational)),
        Just(Some(SeverityLevel::Minor)),
        Just(Some(SeverityLevel::Moderate)),
        Just(Some(SeverityLevel::Severe)),
    ]
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Positive),
        Just(Orientation::Negative),
        Just(Orientation::Mixed),
    ]
}

prop_compose! {
    fn arb_event()(
        id in 0u32..10_000,
        impacts in prop::array::uniform4(-20.0f64..20.0),
        severity in severity(),
        verification in verification(),
        credibility in -0.5f64..1.5,
        days_ago in -30i64..800,
        orientation in orientation(),
        irrelevant in prop::bool::weighted(0.1),
        owner in 0u8..5,
    ) -> Event {
        let date = now() - Duration::days(days_ago);
        Event {
            id: format!("evt-{id}"),
            brand_id: "acme".to_string(),
            category_impacts: CategoryMap::from_fn(|c| impacts[c as usize]),
            severity,
            verification,
            credibility,
            event_date: Some(date),
            created_at: date,
            is_irrelevant: irrelevant,
            orientation,
            source_kind: SourceKind::Generic,
            raw: Default::default(),
            source: Some(EventSource {
                outlet: format!("outlet-{owner}"),
                owner: Some(format!("owner-{owner}")),
            }),
        }
    }
}

proptest! {
    #[test]
    fn vector_entries_stay_within_cap(events in prop::collection::vec(arb_event(), 0..40)) {
        let vector = VectorAggregator::default().aggregate("acme", &events, 90, now());
        for (category, value) in vector.values.iter() {
            prop_assert!(value.is_finite(), "{} not finite", category);
            prop_assert!((-5.0..=5.0).contains(value), "{} = {} out of range", category, value);
        }
        prop_assert_eq!(vector.events_used + vector.events_filtered, events.len());
    }

    #[test]
    fn breakdown_values_stay_in_score_range(events in prop::collection::vec(arb_event(), 0..40)) {
        let engine = ScoringEngine::with_clock(TrustConfig::default(), FixedClock(now()));
        let breakdown = engine.score_brand("acme", &events, &events);
        for category in Category::ALL {
            let block = &breakdown.blocks[category];
            prop_assert!((0.0..=100.0).contains(&block.value));
            prop_assert!((0.0..=100.0).contains(&block.confidence));
            prop_assert!((25.0..=75.0).contains(&block.base));
            if block.proof_required {
                prop_assert_eq!(block.value, block.base);
            }
        }
        prop_assert!((0.0..=100.0).contains(&breakdown.overall));
    }

    #[test]
    fn scoring_is_deterministic(events in prop::collection::vec(arb_event(), 0..20)) {
        let engine = ScoringEngine::with_clock(TrustConfig::default(), FixedClock(now()));
        let a = serde_json::to_string(&engine.score_brand("acme", &events, &events)).unwrap();
        let b = serde_json::to_string(&engine.score_brand("acme", &events, &events)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_is_order_independent(events in prop::collection::vec(arb_event(), 0..20)) {
        let mut reversed = events.clone();
        reversed.reverse();
        // Duplicate ids keep their relative order under a stable sort, so
        // only compare when ids are unique.
        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assume!(ids.len() == events.len());
        prop_assert_eq!(fingerprint(&events), fingerprint(&reversed));
    }

    #[test]
    fn confidence_is_bounded(
        total in 0u32..50,
        verified in 0u32..50,
        owners in 0u32..20,
        days in prop::option::of(0.0f64..2000.0),
    ) {
        let stats = SourceStats {
            total_events: total,
            verified_count: verified.min(total),
            official_count: 0,
            independent_owners: owners,
            days_since_last_event: days,
        };
        let c = confidence_index(&stats, &ConfidenceConfig::default());
        prop_assert!((0.0..=100.0).contains(&c));
    }
}
