use trustscore_core::models::{Dealbreaker, Driver};

/// Fit band label for a rounded score.
pub fn fit_band(score: f64) -> &'static str {
    if score >= 70.0 {
        "Strong fit"
    } else if score >= 55.0 {
        "Good fit"
    } else if score >= 45.0 {
        "Mixed fit"
    } else {
        "Poor fit"
    }
}

/// One-line explanation. A triggered dealbreaker takes precedence over the
/// fit band, however high the score.
pub(crate) fn summarize(
    brand_name: &str,
    score: f64,
    drivers: &[Driver],
    dealbreaker: &Dealbreaker,
) -> String {
    let name = if brand_name.trim().is_empty() {
        "This brand"
    } else {
        brand_name
    };

    if dealbreaker.triggered {
        if let (Some(category), Some(brand_score)) = (dealbreaker.dimension, dealbreaker.brand_score)
        {
            return format!(
                "Dealbreaker: {name} scores {brand_score:.0} on {category}, which you weight highly"
            );
        }
    }

    if drivers.is_empty() {
        return "No strong preferences set; showing a neutral fit".to_string();
    }

    match drivers.first().filter(|d| d.contribution != 0.0) {
        Some(top) => format!(
            "{} ({score:.0}): {} is the biggest factor at {:.0}",
            fit_band(score),
            top.dimension,
            top.brand_score
        ),
        None => format!("{} ({score:.0})", fit_band(score)),
    }
}
