//! Default values for every config section.

// Decay
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 45.0;

// Vector aggregation
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;
pub const DEFAULT_VECTOR_CAP: f64 = 5.0;
pub const DEFAULT_MIXED_CAP: f64 = 3.0;
pub const DEFAULT_STALE_AFTER_HOURS: u32 = 24;

// Baseline
pub const DEFAULT_BASELINE_HORIZON_DAYS: u32 = 730;
pub const DEFAULT_BASELINE_WINDOW_DAYS: u32 = 90;
pub const DEFAULT_BASELINE_CEILING: f64 = 75.0;
pub const DEFAULT_BASELINE_FLOOR: f64 = 25.0;
pub const DEFAULT_BASELINE_SLOPE: f64 = 50.0;
pub const DEFAULT_BASELINE_NEUTRAL: f64 = 50.0;

// Window delta / proof gate
pub const DEFAULT_DELTA_SCALE: f64 = 5.0;
pub const DEFAULT_MIN_MATERIAL_DELTA: f64 = 1.0;
pub const DEFAULT_MIN_VERIFIED_SOURCES: u32 = 2;
pub const DEFAULT_MIN_INDEPENDENT_OWNERS: u32 = 2;

// Confidence
pub const DEFAULT_CONFIDENCE_STALE_AFTER_DAYS: f64 = 30.0;
pub const DEFAULT_STALENESS_HALF_LIFE_DAYS: f64 = 30.0;
pub const DEFAULT_VERIFIED_SATURATION: u32 = 5;
pub const DEFAULT_OWNER_SATURATION: u32 = 3;
pub const DEFAULT_VERIFIED_WEIGHT: f64 = 45.0;
pub const DEFAULT_DIVERSITY_WEIGHT: f64 = 35.0;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 20.0;

// Alignment
pub const DEFAULT_ALIGNMENT_NEUTRAL: f64 = 50.0;
pub const DEFAULT_CARES_BAND: f64 = 20.0;
pub const DEFAULT_DEALBREAKER_FLOOR: f64 = 25.0;
pub const DEFAULT_COMPARISON_MIN_RAW_DELTA: f64 = 3.0;
pub const DEFAULT_COMPARISON_MAX_CONTRIBUTORS: usize = 2;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
