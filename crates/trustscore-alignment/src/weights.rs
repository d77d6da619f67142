//! Slider normalization and the shared "cares about" predicate.

use trustscore_core::constants::WEIGHT_EPSILON;
use trustscore_core::models::{NormalizedWeights, RawWeights};
use trustscore_core::{Category, CategoryMap};

/// Normalize raw 0–100 sliders so they sum to 1.
///
/// All-zero sliders fall back to the equal split.
pub fn normalize(raw: &RawWeights) -> NormalizedWeights {
    let sliders = CategoryMap::from_fn(|c| raw.slider(c));
    let total: f64 = sliders.iter().map(|(_, v)| *v).sum();
    if total <= WEIGHT_EPSILON {
        return NormalizedWeights::equal();
    }
    NormalizedWeights {
        weights: sliders.map(|_, v| v / total),
        defaulted: false,
    }
}

/// Whether a slider is far enough from neutral to count as a preference.
///
/// The band is exclusive: a slider exactly `band` points from neutral is
/// not cared about. Used for categories and political axes alike.
pub fn cares_about(weight: f64, neutral: f64, band: f64) -> bool {
    weight.is_finite() && (weight - neutral).abs() > band
}

/// Sliders as the alignment engine reads them: clamped to 0–100, with an
/// all-zero set read as every slider at `neutral`.
pub(crate) fn effective_sliders(raw: &RawWeights, neutral: f64) -> CategoryMap<f64> {
    if raw.is_all_zero() {
        CategoryMap::splat(neutral)
    } else {
        CategoryMap::from_fn(|c: Category| raw.slider(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_weights_sum_to_one() {
        let n = normalize(&RawWeights::new(90.0, 10.0, 50.0, 0.0));
        assert!((n.sum() - 1.0).abs() < 1e-12);
        assert!(!n.defaulted);
        assert!((n.get(Category::Labor) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn all_zero_falls_back_to_equal_split() {
        let n = normalize(&RawWeights::new(0.0, 0.0, 0.0, 0.0));
        assert!(n.defaulted);
        for category in Category::ALL {
            assert_eq!(n.get(category), 0.25);
        }
    }

    #[test]
    fn cares_band_is_exclusive() {
        assert!(!cares_about(70.0, 50.0, 20.0));
        assert!(!cares_about(30.0, 50.0, 20.0));
        assert!(cares_about(70.5, 50.0, 20.0));
        assert!(cares_about(10.0, 50.0, 20.0));
        assert!(!cares_about(f64::NAN, 50.0, 20.0));
    }
}
