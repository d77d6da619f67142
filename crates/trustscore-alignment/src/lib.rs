//! # trustscore-alignment
//!
//! Personalized fit of a brand for one user.
//!
//! - **Weights** — raw 0–100 sliders normalized to sum to 1, with the shared
//!   [`cares_about`] predicate deciding which sliders count as preferences
//! - **Alignment** — weighted blend over cared-about dimensions, signed
//!   drivers, dealbreaker detection, and a one-line summary
//! - **Politics** — two-axis matching when both sides carry intensity and
//!   alignment positions, single-score politics otherwise
//! - **Comparison** — top contributors when switching to an alternative
//!
//! Depends only on brand category scores, never on raw events.

pub mod engine;
pub mod political;
pub mod summary;
pub mod weights;

pub use engine::AlignmentEngine;
pub use political::{resolve_axes, AxisMatch};
pub use summary::fit_band;
pub use weights::{cares_about, normalize};
