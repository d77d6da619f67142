use trustscore_core::SeverityTier;

/// Severity weight for a tier; `None` takes the 0.5 default.
pub fn severity_value(tier: Option<SeverityTier>) -> f64 {
    match tier {
        Some(SeverityTier::Critical) => 1.0,
        Some(SeverityTier::High) => 0.8,
        Some(SeverityTier::Medium) => 0.5,
        Some(SeverityTier::Low) => 0.3,
        None => 0.5,
    }
}
