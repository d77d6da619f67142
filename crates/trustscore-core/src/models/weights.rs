use serde::{Deserialize, Serialize};

use crate::category::{deserialize_sparse, Category, CategoryMap};

/// Raw 0–100 slider inputs, as persisted for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWeights {
    #[serde(default, deserialize_with = "deserialize_sparse")]
    pub categories: CategoryMap<f64>,
    /// Optional political sub-axes (0–100 positions).
    #[serde(default)]
    pub political_intensity: Option<f64>,
    #[serde(default)]
    pub political_alignment: Option<f64>,
}

impl RawWeights {
    pub fn new(labor: f64, environment: f64, politics: f64, social: f64) -> Self {
        Self {
            categories: CategoryMap {
                labor,
                environment,
                politics,
                social,
            },
            political_intensity: None,
            political_alignment: None,
        }
    }

    pub fn with_political_axes(mut self, intensity: f64, alignment: f64) -> Self {
        self.political_intensity = Some(intensity);
        self.political_alignment = Some(alignment);
        self
    }

    /// Slider value clamped to 0–100; non-finite reads as zero.
    pub fn slider(&self, category: Category) -> f64 {
        let v = self.categories[category];
        if v.is_finite() {
            v.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn is_all_zero(&self) -> bool {
        Category::ALL.iter().all(|c| self.slider(*c) == 0.0)
    }
}

impl Default for RawWeights {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 50.0)
    }
}

/// Weights normalized to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeights {
    pub weights: CategoryMap<f64>,
    /// True when the raw sliders summed to zero and the equal split was used.
    pub defaulted: bool,
}

impl NormalizedWeights {
    pub fn equal() -> Self {
        Self {
            weights: CategoryMap::splat(0.25),
            defaulted: true,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.weights[category]
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().map(|(_, w)| *w).sum()
    }
}
