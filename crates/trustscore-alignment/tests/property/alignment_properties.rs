use proptest::prelude::*;
use trustscore_alignment::{normalize, AlignmentEngine};
use trustscore_core::models::{BrandScores, RawWeights};
use trustscore_core::{Category, CategoryMap};

fn arb_weights() -> impl Strategy<Value = RawWeights> {
    (
        prop::array::uniform4(0.0f64..100.0),
        prop::option::of((0.0f64..100.0, 0.0f64..100.0)),
    )
        .prop_map(|(w, axes)| {
            let weights = RawWeights::new(w[0], w[1], w[2], w[3]);
            match axes {
                Some((intensity, alignment)) => weights.with_political_axes(intensity, alignment),
                None => weights,
            }
        })
}

fn arb_brand() -> impl Strategy<Value = BrandScores> {
    (
        prop::array::uniform4(prop::option::of(0.0f64..100.0)),
        prop::option::of((0.0f64..100.0, 0.0f64..100.0)),
    )
        .prop_map(|(scores, axes)| {
            let mut brand = BrandScores::new("acme", "Acme", CategoryMap::splat(50.0));
            brand.categories = CategoryMap::from_fn(|c| scores[c as usize]);
            match axes {
                Some((intensity, alignment)) => brand.with_political_axes(intensity, alignment),
                None => brand,
            }
        })
}

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(w in prop::array::uniform4(0.0f64..100.0)) {
        let n = normalize(&RawWeights::new(w[0], w[1], w[2], w[3]));
        prop_assert!((n.sum() - 1.0).abs() < 1e-9, "sum {}", n.sum());
        for category in Category::ALL {
            prop_assert!(n.get(category) >= 0.0);
        }
    }

    #[test]
    fn alignment_score_in_range(weights in arb_weights(), brand in arb_brand()) {
        let result = AlignmentEngine::default().compute_alignment(&weights, &brand);
        prop_assert!((0.0..=100.0).contains(&result.score));
        prop_assert!((0.0..=100.0).contains(&result.score_raw));
        prop_assert_eq!(result.score, result.score_raw.round());
        prop_assert_eq!(result.drivers.len(), result.included_dimensions.len());
    }

    #[test]
    fn drivers_sum_to_score_offset(weights in arb_weights(), brand in arb_brand()) {
        let result = AlignmentEngine::default().compute_alignment(&weights, &brand);
        let total: f64 = result.drivers.iter().map(|d| d.contribution).sum();
        prop_assert!((result.score_raw - 50.0 - total).abs() < 1e-6);
    }

    #[test]
    fn drivers_are_sorted_by_magnitude(weights in arb_weights(), brand in arb_brand()) {
        let result = AlignmentEngine::default().compute_alignment(&weights, &brand);
        for pair in result.drivers.windows(2) {
            prop_assert!(pair[0].contribution.abs() >= pair[1].contribution.abs());
        }
    }

    #[test]
    fn comparison_respects_limits(
        weights in arb_weights(),
        current in arb_brand(),
        alternative in arb_brand(),
    ) {
        let summary = AlignmentEngine::default().compare_alternative(&weights, &current, &alternative);
        prop_assert!(summary.contributors.len() <= 2);
        for c in &summary.contributors {
            prop_assert!(c.raw_delta.abs() >= 3.0);
        }
    }
}
