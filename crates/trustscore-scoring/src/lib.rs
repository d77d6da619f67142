//! # trustscore-scoring
//!
//! Turns a brand's classified events into its public score breakdown.
//!
//! ## Pipeline
//! 1. **Vector** — recency/verification-weighted impact per category over a
//!    lookback window, clamped to `[-cap, cap]`, with the mixed-event cap
//! 2. **Baseline** — long-horizon score from category mention frequency
//! 3. **Gate** — window delta in score points, muted while proof is required
//! 4. **Confidence** — 0–100 index from verified sources, owner diversity,
//!    and recency, plus trust labels
//! 5. **Breakdown** — one block per category and the overall blend
//!
//! Every function takes `now` explicitly; [`ScoringEngine`] reads it from an
//! injected [`Clock`](trustscore_core::Clock).

pub mod baseline;
pub mod batch;
pub mod breakdown;
pub mod confidence;
pub mod engine;
pub mod gate;
pub mod source_stats;
pub mod vector;

pub use baseline::BaselineBuilder;
pub use batch::BrandEvents;
pub use breakdown::BreakdownComposer;
pub use engine::ScoringEngine;
pub use vector::{fingerprint, VectorAggregator};
