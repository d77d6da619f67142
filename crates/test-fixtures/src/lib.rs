//! Test fixture loader for trustscore golden scenarios.
//!
//! Provides typed deserialization of the scenario JSON files and helper
//! functions for loading them in tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use trustscore_core::models::{BrandScores, Dimension, RawWeights};
use trustscore_core::{Category, Event};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Scenario files ship inside this crate, so its own manifest dir is the root
    // no matter which workspace crate runs the test.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every fixture in a subdirectory.
pub fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<T> {
    let root = fixtures_root();
    list_fixtures(subdir)
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(&root)
                .unwrap_or_else(|_| panic!("fixture {} outside root", path.display()));
            load_fixture(&relative.to_string_lossy())
        })
        .collect()
}

// ── Scoring scenarios ────────────────────────────────────────────────────

/// A brand's events at a frozen instant, with expected outcomes.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub now: DateTime<Utc>,
    pub brand_id: String,
    pub events: Vec<Event>,
    #[serde(default)]
    pub expect: ScoringExpectations,
}

/// Expected outcomes; absent keys are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringExpectations {
    pub vector_min: BTreeMap<Category, f64>,
    pub vector_max: BTreeMap<Category, f64>,
    pub base: BTreeMap<Category, f64>,
    pub proof_required: BTreeMap<Category, bool>,
    pub value: BTreeMap<Category, f64>,
}

// ── Alignment scenarios ──────────────────────────────────────────────────

/// A user's sliders against a brand (and optionally an alternative).
#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub weights: RawWeights,
    pub brand: BrandScores,
    #[serde(default)]
    pub alternative: Option<BrandScores>,
    #[serde(default)]
    pub expect: AlignmentExpectations,
}

/// Expected alignment outcomes; absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlignmentExpectations {
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    pub dealbreaker: Option<bool>,
    pub included: Option<Vec<Dimension>>,
    pub excluded: Option<Vec<Dimension>>,
    pub comparison_message: Option<String>,
}
