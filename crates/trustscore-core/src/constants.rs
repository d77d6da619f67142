/// Longest lookback or baseline horizon a config may declare (100 years).
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Lower bound of every displayed score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every displayed score.
pub const SCORE_MAX: f64 = 100.0;

/// Neutral score returned for degenerate inputs.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Seconds per day, for fractional day arithmetic on timestamps.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Tolerance used when comparing normalized weights against 1.0.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Clamp into the displayed score range, mapping non-finite values to neutral.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(SCORE_MIN, SCORE_MAX)
    } else {
        NEUTRAL_SCORE
    }
}
