//! # trustscore-severity
//!
//! Severity classification for classified events.
//!
//! ## Policies
//! 1. **Regulatory-environmental** — quarters of non-compliance
//! 2. **Regulatory-labor** — willful/repeat/serious counts and penalty amount
//! 3. **Regulatory-political** — partisan tilt percentage
//! 4. **Generic** — impact magnitude of the dominant category
//!
//! Every regulatory policy falls back to the generic rule when its raw
//! metrics are missing, so classification never fails.

pub mod classifier;
pub mod policies;

pub use classifier::SeverityClassifier;
