//! # trustscore-observability
//!
//! Tracing subscriber setup and span macros for every scoring operation.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans::names};
