//! Classified brand events, as delivered by the ingestion layer.
//!
//! Events are immutable inputs: the engine only reads them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{deserialize_sparse, Category, CategoryMap};
use crate::errors::TrustError;

/// How well a source backs the event.
///
/// Deserializes from any string; anything unrecognised becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationLevel {
    Official,
    Corroborated,
    Unverified,
    #[default]
    Unknown,
}

impl VerificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationLevel::Official => "official",
            VerificationLevel::Corroborated => "corroborated",
            VerificationLevel::Unverified => "unverified",
            VerificationLevel::Unknown => "unknown",
        }
    }

    /// Official and corroborated sources count as verified.
    pub fn is_verified(self) -> bool {
        matches!(
            self,
            VerificationLevel::Official | VerificationLevel::Corroborated
        )
    }
}

impl From<String> for VerificationLevel {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "official" => VerificationLevel::Official,
            "corroborated" => VerificationLevel::Corroborated,
            "unverified" => VerificationLevel::Unverified,
            _ => VerificationLevel::Unknown,
        }
    }
}

impl From<VerificationLevel> for String {
    fn from(level: VerificationLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for VerificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity as assigned by the classifier policy tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    #[serde(alias = "info")]
    Informational,
    Minor,
    Moderate,
    Severe,
}

impl SeverityLevel {
    /// Weight tier used by the vector aggregator.
    ///
    /// informational → low, minor → medium, moderate → high, severe → critical.
    pub fn tier(self) -> SeverityTier {
        match self {
            SeverityLevel::Informational => SeverityTier::Low,
            SeverityLevel::Minor => SeverityTier::Medium,
            SeverityLevel::Moderate => SeverityTier::High,
            SeverityLevel::Severe => SeverityTier::Critical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Informational => "informational",
            SeverityLevel::Minor => "minor",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity weight tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Critical,
}

/// Whether an event pushes a category up, down, or ambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Positive,
    #[default]
    Negative,
    Mixed,
}

/// Which severity policy table applies to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    RegulatoryEnvironmental,
    RegulatoryLabor,
    RegulatoryPolitical,
    #[default]
    Generic,
}

impl SourceKind {
    /// Map a free-form source name to a kind, falling back to `Generic`.
    pub fn infer(source: &str) -> Self {
        source.parse().unwrap_or(SourceKind::Generic)
    }
}

impl FromStr for SourceKind {
    type Err = TrustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "epa" | "echo" | "regulatory_environmental" => Ok(SourceKind::RegulatoryEnvironmental),
            "osha" | "regulatory_labor" => Ok(SourceKind::RegulatoryLabor),
            "fec" | "regulatory_political" => Ok(SourceKind::RegulatoryPolitical),
            "generic" | "news" => Ok(SourceKind::Generic),
            _ => Err(TrustError::UnknownSourceKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Raw regulatory metrics used to re-derive severity. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetrics {
    /// Quarters of environmental non-compliance.
    pub quarters_noncompliance: Option<u32>,
    pub willful_violations: Option<u32>,
    pub repeat_violations: Option<u32>,
    pub serious_violations: Option<u32>,
    /// Total assessed penalty, in dollars.
    pub penalty_amount: Option<f64>,
    /// Share of political giving to the dominant party, 0–100.
    pub partisan_tilt_pct: Option<f64>,
}

impl RawMetrics {
    pub fn has_labor_metrics(&self) -> bool {
        self.willful_violations.is_some()
            || self.repeat_violations.is_some()
            || self.serious_violations.is_some()
            || self.penalty_amount.is_some_and(f64::is_finite)
    }
}

/// The outlet that reported an event and the media group that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    pub outlet: String,
    #[serde(default)]
    pub owner: Option<String>,
}

impl EventSource {
    /// Key used for independent-owner counting: the owner, else the outlet.
    pub fn owner_key(&self) -> String {
        self.owner
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or(&self.outlet)
            .trim()
            .to_ascii_lowercase()
    }
}

/// A classified event about a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub brand_id: String,
    /// Signed, pre-weighting impact per category (roughly −20..+20).
    #[serde(default, deserialize_with = "deserialize_sparse")]
    pub category_impacts: CategoryMap<f64>,
    /// Classified severity; derived from `raw` by the classifier when absent.
    #[serde(default)]
    pub severity: Option<SeverityLevel>,
    #[serde(default)]
    pub verification: VerificationLevel,
    /// Source trustworthiness, 0..1.
    #[serde(default = "default_credibility")]
    pub credibility: f64,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_irrelevant: bool,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub source_kind: SourceKind,
    #[serde(default)]
    pub raw: RawMetrics,
    #[serde(default)]
    pub source: Option<EventSource>,
}

fn default_credibility() -> f64 {
    0.5
}

impl Event {
    /// The date the event happened, falling back to when it was recorded.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.event_date.unwrap_or(self.created_at)
    }

    /// Impact for a category, with non-finite values read as zero.
    pub fn impact(&self, category: Category) -> f64 {
        let v = self.category_impacts[category];
        if v.is_finite() {
            v
        } else {
            0.0
        }
    }

    /// True when the event carries no usable signal in any category.
    pub fn has_no_impact(&self) -> bool {
        self.category_impacts.is_all_zero()
    }

    /// Category with the largest absolute impact; ties go to declaration order.
    /// `None` when every impact is zero.
    pub fn dominant_category(&self) -> Option<Category> {
        let mut best: Option<(Category, f64)> = None;
        for category in Category::ALL {
            let magnitude = self.impact(category).abs();
            if magnitude == 0.0 {
                continue;
            }
            match best {
                Some((_, m)) if m >= magnitude => {}
                _ => best = Some((category, magnitude)),
            }
        }
        best.map(|(c, _)| c)
    }

    /// Whether the event touches a category at all.
    pub fn mentions(&self, category: Category) -> bool {
        self.impact(category) != 0.0
    }
}
