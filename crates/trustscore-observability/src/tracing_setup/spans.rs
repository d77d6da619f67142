//! Span definitions per operation: vector, baseline, breakdown, alignment, batch.

/// Create a category vector span.
#[macro_export]
macro_rules! vector_span {
    ($brand_id:expr, $lookback_days:expr) => {
        tracing::info_span!("trustscore.vector", brand_id = %$brand_id, lookback_days = $lookback_days)
    };
}

/// Create a baseline span.
#[macro_export]
macro_rules! baseline_span {
    ($brand_id:expr, $event_count:expr) => {
        tracing::info_span!("trustscore.baseline", brand_id = %$brand_id, event_count = $event_count)
    };
}

/// Create a breakdown composition span.
#[macro_export]
macro_rules! breakdown_span {
    ($brand_id:expr) => {
        tracing::info_span!("trustscore.breakdown", brand_id = %$brand_id)
    };
}

/// Create an alignment span.
#[macro_export]
macro_rules! alignment_span {
    ($brand_id:expr) => {
        tracing::info_span!("trustscore.alignment", brand_id = %$brand_id)
    };
}

/// Create a batch refresh span.
#[macro_export]
macro_rules! batch_span {
    ($brand_count:expr) => {
        tracing::info_span!("trustscore.batch", brand_count = $brand_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VECTOR: &str = "trustscore.vector";
    pub const BASELINE: &str = "trustscore.baseline";
    pub const BREAKDOWN: &str = "trustscore.breakdown";
    pub const ALIGNMENT: &str = "trustscore.alignment";
    pub const BATCH: &str = "trustscore.batch";
}
