use chrono::{DateTime, Utc};
use trustscore_core::constants::SECONDS_PER_DAY;

/// Fractional days from `event_date` to `now`. Future dates count as age 0.
pub fn age_days(event_date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - event_date).num_seconds().max(0) as f64 / SECONDS_PER_DAY
}

/// Recency decay factor: `exp(-ageDays * ln2 / halfLife)`.
///
/// Range: 0.0 – 1.0. Equals 1.0 at age 0 and halves every `half_life_days`.
pub fn recency_decay(event_date: DateTime<Utc>, now: DateTime<Utc>, half_life_days: f64) -> f64 {
    recency_decay_days(age_days(event_date, now), half_life_days)
}

/// Recency decay for an age already expressed in days.
///
/// A non-positive or non-finite half-life disables decay (returns 1.0);
/// negative or non-finite ages are treated as age 0.
pub fn recency_decay_days(age_days: f64, half_life_days: f64) -> f64 {
    if !half_life_days.is_finite() || half_life_days <= 0.0 {
        return 1.0;
    }
    // f64::max drops NaN, so a NaN age reads as 0.
    let age = age_days.max(0.0);
    (-age * std::f64::consts::LN_2 / half_life_days)
        .exp()
        .clamp(0.0, 1.0)
}
