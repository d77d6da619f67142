use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use trustscore_decay::{recency_decay, recency_decay_days};

proptest! {
    #[test]
    fn decay_bounded_zero_to_one(age in -1000.0f64..100_000.0, half_life in 0.1f64..1000.0) {
        let d = recency_decay_days(age, half_life);
        prop_assert!((0.0..=1.0).contains(&d), "decay {} out of bounds", d);
    }

    #[test]
    fn more_recent_decays_less(d1 in 0i64..2000, gap in 1i64..500, half_life in 1.0f64..365.0) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let recent = recency_decay(now - Duration::days(d1), now, half_life);
        let older = recency_decay(now - Duration::days(d1 + gap), now, half_life);
        // Strict until both underflow to zero.
        prop_assert!(recent > older || (recent == 0.0 && older == 0.0),
            "recent {} <= older {}", recent, older);
    }

    #[test]
    fn decay_is_deterministic(age in 0.0f64..5000.0, half_life in 1.0f64..365.0) {
        prop_assert_eq!(
            recency_decay_days(age, half_life).to_bits(),
            recency_decay_days(age, half_life).to_bits()
        );
    }
}

#[test]
fn decay_is_one_at_age_zero() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(recency_decay(now, now, 45.0), 1.0);
}
