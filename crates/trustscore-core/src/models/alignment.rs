use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{deserialize_sparse, Category, CategoryMap};
use crate::models::ScoreBreakdown;

/// A scored dimension of alignment: a category or a political sub-axis.
///
/// Declaration order is the tie-break order for drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Labor,
    Environment,
    Politics,
    Social,
    PoliticalIntensity,
    PoliticalAlignment,
}

impl Dimension {
    pub fn category(self) -> Option<Category> {
        match self {
            Dimension::Labor => Some(Category::Labor),
            Dimension::Environment => Some(Category::Environment),
            Dimension::Politics => Some(Category::Politics),
            Dimension::Social => Some(Category::Social),
            Dimension::PoliticalIntensity | Dimension::PoliticalAlignment => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Labor => "Labor",
            Dimension::Environment => "Environment",
            Dimension::Politics => "Politics",
            Dimension::Social => "Social",
            Dimension::PoliticalIntensity => "Political intensity",
            Dimension::PoliticalAlignment => "Political alignment",
        }
    }
}

impl From<Category> for Dimension {
    fn from(category: Category) -> Self {
        match category {
            Category::Labor => Dimension::Labor,
            Category::Environment => Dimension::Environment,
            Category::Politics => Dimension::Politics,
            Category::Social => Dimension::Social,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Sign of a driver's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn of(contribution: f64) -> Self {
        if contribution > 0.0 {
            Impact::Positive
        } else if contribution < 0.0 {
            Impact::Negative
        } else {
            Impact::Neutral
        }
    }
}

/// One dimension's signed effect on the alignment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub dimension: Dimension,
    /// `(brand_score - 50) * weight`.
    pub contribution: f64,
    pub brand_score: f64,
    /// Raw 0–100 slider value.
    pub user_weight: f64,
    /// Normalized weight used in the blend.
    pub weight: f64,
    pub impact: Impact,
}

/// Whether a highly weighted category scored critically low.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dealbreaker {
    pub triggered: bool,
    pub dimension: Option<Category>,
    pub brand_score: Option<f64>,
    pub user_weight: Option<f64>,
}

/// How much evidence the alignment result rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentConfidence {
    High,
    Medium,
    Low,
}

/// Personalized fit of one brand for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    /// Rounded score, 0–100.
    pub score: f64,
    pub score_raw: f64,
    pub confidence: AlignmentConfidence,
    /// Included dimensions, largest |contribution| first.
    pub drivers: Vec<Driver>,
    pub top_positive: Option<Driver>,
    pub top_negative: Option<Driver>,
    pub dealbreaker: Dealbreaker,
    pub excluded_dimensions: Vec<Dimension>,
    pub included_dimensions: Vec<Dimension>,
    pub summary: String,
}

/// A brand's category scores, as consumed by the alignment engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandScores {
    pub brand_id: String,
    pub name: String,
    /// `None` where the brand has no score for a category.
    #[serde(default, deserialize_with = "deserialize_sparse")]
    pub categories: CategoryMap<Option<f64>>,
    #[serde(default)]
    pub political_intensity: Option<f64>,
    #[serde(default)]
    pub political_alignment: Option<f64>,
}

impl BrandScores {
    pub fn new(brand_id: &str, name: &str, scores: CategoryMap<f64>) -> Self {
        Self {
            brand_id: brand_id.to_string(),
            name: name.to_string(),
            categories: scores.map(|_, v| Some(*v)),
            political_intensity: None,
            political_alignment: None,
        }
    }

    pub fn with_political_axes(mut self, intensity: f64, alignment: f64) -> Self {
        self.political_intensity = Some(intensity);
        self.political_alignment = Some(alignment);
        self
    }

    /// Score for a category, ignoring non-finite values.
    pub fn score(&self, category: Category) -> Option<f64> {
        self.categories[category].filter(|v| v.is_finite())
    }

    pub fn from_breakdown(name: &str, breakdown: &ScoreBreakdown) -> Self {
        Self::new(&breakdown.brand_id, name, breakdown.values())
    }
}

/// One category's part in a brand-vs-alternative comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonContributor {
    pub category: Category,
    /// `alternative - current`.
    pub raw_delta: f64,
    pub weighted_delta: f64,
}

/// Top contributors when comparing a brand against an alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub contributors: Vec<ComparisonContributor>,
    pub message: String,
}
