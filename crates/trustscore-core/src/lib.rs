//! # trustscore-core
//!
//! Foundation crate for the brand trust scoring engine.
//! Defines the category model, events, derived score types, config,
//! errors, and constants. Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::{deserialize_sparse, Category, CategoryMap};
pub use config::TrustConfig;
pub use errors::{TrustError, TrustResult};
pub use event::{
    Event, EventSource, Orientation, RawMetrics, SeverityLevel, SeverityTier, SourceKind,
    VerificationLevel,
};
pub use traits::{Clock, FixedClock, SystemClock};
