//! Two-axis political matching.
//!
//! When the user and the brand both carry intensity and alignment positions,
//! politics is scored per axis as closeness of positions instead of through
//! the single politics category score.

use serde::{Deserialize, Serialize};
use trustscore_core::constants::clamp_score;
use trustscore_core::models::{BrandScores, Dimension, RawWeights};

/// One political axis: the user's position and the brand's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMatch {
    pub dimension: Dimension,
    pub user_position: f64,
    pub brand_position: f64,
}

impl AxisMatch {
    /// Closeness of positions: 100 when identical, 0 at opposite ends.
    pub fn score(&self) -> f64 {
        clamp_score(100.0 - (self.user_position - self.brand_position).abs())
    }
}

/// Both axes, or `None` when either side lacks either axis.
pub fn resolve_axes(weights: &RawWeights, brand: &BrandScores) -> Option<[AxisMatch; 2]> {
    let position = |v: Option<f64>| v.filter(|x| x.is_finite()).map(|x| x.clamp(0.0, 100.0));

    let user_intensity = position(weights.political_intensity)?;
    let user_alignment = position(weights.political_alignment)?;
    let brand_intensity = position(brand.political_intensity)?;
    let brand_alignment = position(brand.political_alignment)?;

    Some([
        AxisMatch {
            dimension: Dimension::PoliticalIntensity,
            user_position: user_intensity,
            brand_position: brand_intensity,
        },
        AxisMatch {
            dimension: Dimension::PoliticalAlignment,
            user_position: user_alignment,
            brand_position: brand_alignment,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustscore_core::CategoryMap;

    #[test]
    fn needs_both_sides_and_both_axes() {
        let brand = BrandScores::new("acme", "Acme", CategoryMap::splat(50.0));
        let weights = RawWeights::default().with_political_axes(80.0, 20.0);
        assert!(resolve_axes(&weights, &brand).is_none());

        let brand = brand.with_political_axes(70.0, 40.0);
        let axes = resolve_axes(&weights, &brand).unwrap();
        assert_eq!(axes[0].score(), 90.0);
        assert_eq!(axes[1].score(), 80.0);

        let mut partial = brand.clone();
        partial.political_alignment = None;
        assert!(resolve_axes(&weights, &partial).is_none());
    }
}
