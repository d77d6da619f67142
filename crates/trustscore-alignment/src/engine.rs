//! [`AlignmentEngine`]: personalized fit of a brand for a user's sliders.

use std::cmp::Ordering;

use trustscore_core::config::AlignmentConfig;
use trustscore_core::constants::{clamp_score, NEUTRAL_SCORE, WEIGHT_EPSILON};
use trustscore_core::models::{
    AlignmentConfidence, AlignmentResult, BrandScores, ComparisonContributor, ComparisonSummary,
    Dealbreaker, Dimension, Driver, Impact, RawWeights,
};
use trustscore_core::{Category, CategoryMap};
use trustscore_observability::alignment_span;

use crate::political::resolve_axes;
use crate::summary::summarize;
use crate::weights::{cares_about, effective_sliders, normalize};

/// A dimension that made it into the blend, before renormalization.
struct Included {
    dimension: Dimension,
    brand_score: f64,
    user_weight: f64,
    weight: f64,
}

/// Computes alignment results and alternative comparisons.
///
/// Pure: identical inputs give identical results.
#[derive(Debug, Clone, Default)]
pub struct AlignmentEngine {
    config: AlignmentConfig,
}

impl AlignmentEngine {
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// The shared "cares about" test with this engine's neutral point and band.
    pub fn cares_about(&self, weight: f64) -> bool {
        cares_about(weight, self.config.neutral, self.config.cares_band)
    }

    /// Blend a brand's scores with the user's sliders.
    ///
    /// Only dimensions the user cares about and the brand has a score for
    /// enter the blend; their normalized weights are rescaled to sum to 1.
    /// With nothing included the score is neutral.
    pub fn compute_alignment(&self, weights: &RawWeights, brand: &BrandScores) -> AlignmentResult {
        let _span = alignment_span!(brand.brand_id).entered();

        let normalized = normalize(weights);
        let all_zero = weights.is_all_zero();
        let sliders = effective_sliders(weights, self.config.neutral);
        let axes = resolve_axes(weights, brand);

        let mut included = Vec::new();
        let mut excluded = Vec::new();

        for category in Category::ALL {
            if let (Category::Politics, Some(axes)) = (category, axes.as_ref()) {
                for axis in axes {
                    if !all_zero && self.cares_about(axis.user_position) {
                        included.push(Included {
                            dimension: axis.dimension,
                            brand_score: axis.score(),
                            user_weight: axis.user_position,
                            weight: normalized.get(Category::Politics) / 2.0,
                        });
                    } else {
                        excluded.push(axis.dimension);
                    }
                }
                continue;
            }

            match brand.score(category) {
                Some(score) if self.cares_about(sliders[category]) => included.push(Included {
                    dimension: category.into(),
                    brand_score: clamp_score(score),
                    user_weight: sliders[category],
                    weight: normalized.get(category),
                }),
                _ => excluded.push(category.into()),
            }
        }

        rescale(&mut included);

        let score_raw = if included.is_empty() {
            NEUTRAL_SCORE
        } else {
            clamp_score(included.iter().map(|d| d.brand_score * d.weight).sum())
        };
        let score = score_raw.round();

        let drivers = rank_drivers(&included);
        let top_positive = drivers.iter().find(|d| d.contribution > 0.0).cloned();
        let top_negative = drivers.iter().find(|d| d.contribution < 0.0).cloned();
        let dealbreaker = self.find_dealbreaker(&sliders, brand);

        if dealbreaker.triggered {
            tracing::info!(
                brand_id = %brand.brand_id,
                category = ?dealbreaker.dimension,
                brand_score = ?dealbreaker.brand_score,
                "alignment dealbreaker triggered"
            );
        }

        let confidence = match included.len() {
            n if n >= 3 => AlignmentConfidence::High,
            2 => AlignmentConfidence::Medium,
            _ => AlignmentConfidence::Low,
        };
        let summary = summarize(&brand.name, score, &drivers, &dealbreaker);
        let included_dimensions: Vec<Dimension> = included.iter().map(|d| d.dimension).collect();

        tracing::debug!(
            brand_id = %brand.brand_id,
            score,
            included = included_dimensions.len(),
            excluded = excluded.len(),
            "computed alignment"
        );

        AlignmentResult {
            score,
            score_raw,
            confidence,
            drivers,
            top_positive,
            top_negative,
            dealbreaker,
            excluded_dimensions: excluded,
            included_dimensions,
            summary,
        }
    }

    /// Lowest-scoring cared-about category that falls below the dealbreaker
    /// floor, whichever side of neutral its slider sits. Ties go to
    /// declaration order.
    fn find_dealbreaker(&self, sliders: &CategoryMap<f64>, brand: &BrandScores) -> Dealbreaker {
        let mut worst: Option<(Category, f64)> = None;
        for category in Category::ALL {
            let slider = sliders[category];
            if !self.cares_about(slider) {
                continue;
            }
            let Some(score) = brand.score(category) else {
                continue;
            };
            if score >= self.config.dealbreaker_floor {
                continue;
            }
            match worst {
                Some((_, lowest)) if lowest <= score => {}
                _ => worst = Some((category, score)),
            }
        }

        match worst {
            Some((category, score)) => Dealbreaker {
                triggered: true,
                dimension: Some(category),
                brand_score: Some(score),
                user_weight: Some(sliders[category]),
            },
            None => Dealbreaker::default(),
        }
    }

    /// Top contributors when switching from `current` to `alternative`.
    ///
    /// `raw_delta = alternative - current`, `weighted_delta = raw_delta ×
    /// normalized weight`. Categories with a small raw gap, or missing on
    /// either side, are skipped.
    pub fn compare_alternative(
        &self,
        weights: &RawWeights,
        current: &BrandScores,
        alternative: &BrandScores,
    ) -> ComparisonSummary {
        let normalized = normalize(weights);

        let mut contributors: Vec<ComparisonContributor> = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let raw_delta = alternative.score(category)? - current.score(category)?;
                (raw_delta.abs() >= self.config.comparison_min_raw_delta).then(|| {
                    ComparisonContributor {
                        category,
                        raw_delta,
                        weighted_delta: raw_delta * normalized.get(category),
                    }
                })
            })
            .collect();

        // Stable sort keeps declaration order among equal magnitudes.
        contributors.sort_by(|a, b| by_magnitude(a.weighted_delta, b.weighted_delta));
        contributors.truncate(self.config.comparison_max_contributors);

        let message = if contributors.is_empty() {
            "Similar across all categories.".to_string()
        } else {
            contributors
                .iter()
                .map(|c| {
                    let direction = if c.raw_delta > 0.0 { "Better" } else { "Worse" };
                    format!("{direction} on {} ({:+.0})", c.category, c.raw_delta)
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        ComparisonSummary {
            contributors,
            message,
        }
    }
}

/// Rescale included weights to sum to 1; equal split when they sum to zero.
fn rescale(included: &mut [Included]) {
    let total: f64 = included.iter().map(|d| d.weight).sum();
    let count = included.len() as f64;
    for dimension in included.iter_mut() {
        dimension.weight = if total > WEIGHT_EPSILON {
            dimension.weight / total
        } else {
            1.0 / count
        };
    }
}

fn rank_drivers(included: &[Included]) -> Vec<Driver> {
    let mut drivers: Vec<Driver> = included
        .iter()
        .map(|d| {
            let contribution = (d.brand_score - NEUTRAL_SCORE) * d.weight;
            Driver {
                dimension: d.dimension,
                contribution,
                brand_score: d.brand_score,
                user_weight: d.user_weight,
                weight: d.weight,
                impact: Impact::of(contribution),
            }
        })
        .collect();
    drivers.sort_by(|a, b| {
        by_magnitude(a.contribution, b.contribution).then(a.dimension.cmp(&b.dimension))
    });
    drivers
}

/// Larger absolute value first.
fn by_magnitude(a: f64, b: f64) -> Ordering {
    b.abs().total_cmp(&a.abs())
}
