use chrono::{Duration, TimeZone, Utc};
use trustscore_core::{CategoryMap, Event, SeverityLevel, SeverityTier, VerificationLevel};
use trustscore_decay::*;

fn make_event(verification: VerificationLevel, credibility: f64, days_ago: i64) -> Event {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Event {
        id: "evt-1".to_string(),
        brand_id: "acme".to_string(),
        category_impacts: CategoryMap {
            labor: -10.0,
            ..CategoryMap::default()
        },
        severity: Some(SeverityLevel::Severe),
        verification,
        credibility,
        event_date: Some(now - Duration::days(days_ago)),
        created_at: now,
        is_irrelevant: false,
        orientation: Default::default(),
        source_kind: Default::default(),
        raw: Default::default(),
        source: None,
    }
}

// ── Verification ordering ───────────────────────────────────────────────

#[test]
fn verification_factors_are_totally_ordered() {
    let official = verification_factor(VerificationLevel::Official);
    let corroborated = verification_factor(VerificationLevel::Corroborated);
    let unverified = verification_factor(VerificationLevel::Unverified);
    let unknown = verification_factor(VerificationLevel::Unknown);
    assert!(official >= corroborated);
    assert!(corroborated >= unverified);
    assert!(unverified >= unknown);
    assert_eq!(official, 1.0);
    assert_eq!(unknown, 0.1);
}

// ── Severity values ─────────────────────────────────────────────────────

#[test]
fn severity_values_match_tiers() {
    assert_eq!(severity_value(Some(SeverityTier::Critical)), 1.0);
    assert_eq!(severity_value(Some(SeverityTier::High)), 0.8);
    assert_eq!(severity_value(Some(SeverityTier::Medium)), 0.5);
    assert_eq!(severity_value(Some(SeverityTier::Low)), 0.3);
    assert_eq!(severity_value(None), 0.5);
}

// ── Event weight breakdown ──────────────────────────────────────────────

#[test]
fn weight_is_product_of_factors() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let event = make_event(VerificationLevel::Official, 0.9, 2);
    let w = EventWeight::compute(&event, SeverityLevel::Severe, now, 45.0);

    let expected = w.severity * w.credibility * w.verification * w.decay;
    assert!((w.combined - expected).abs() < 1e-12);
    assert_eq!(w.severity, 1.0);
    assert_eq!(w.credibility, 0.9);
    assert!(w.decay > 0.96 && w.decay < 0.97, "decay was {}", w.decay);
}

#[test]
fn out_of_range_credibility_is_clamped() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let high = make_event(VerificationLevel::Official, 7.0, 0);
    let nan = make_event(VerificationLevel::Official, f64::NAN, 0);
    assert_eq!(
        EventWeight::compute(&high, SeverityLevel::Severe, now, 45.0).credibility,
        1.0
    );
    let w = EventWeight::compute(&nan, SeverityLevel::Severe, now, 45.0);
    assert_eq!(w.combined, 0.0);
    assert_eq!(w.apply(-10.0), 0.0);
}

#[test]
fn older_events_weigh_less() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let recent = EventWeight::compute(
        &make_event(VerificationLevel::Corroborated, 0.8, 1),
        SeverityLevel::Moderate,
        now,
        45.0,
    );
    let old = EventWeight::compute(
        &make_event(VerificationLevel::Corroborated, 0.8, 80),
        SeverityLevel::Moderate,
        now,
        45.0,
    );
    assert!(recent.combined > old.combined);
}

#[test]
fn missing_event_date_falls_back_to_created_at() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let mut event = make_event(VerificationLevel::Official, 1.0, 30);
    event.event_date = None;
    event.created_at = now - Duration::days(45);
    let w = EventWeight::compute(&event, SeverityLevel::Severe, now, 45.0);
    assert!((w.decay - 0.5).abs() < 1e-9);
}
