use trustscore_core::VerificationLevel;

/// Verification factor.
///
/// official 1.0 ≥ corroborated 0.75 ≥ unverified 0.5 ≥ unknown 0.1.
pub fn verification_factor(level: VerificationLevel) -> f64 {
    match level {
        VerificationLevel::Official => 1.0,
        VerificationLevel::Corroborated => 0.75,
        VerificationLevel::Unverified => 0.5,
        VerificationLevel::Unknown => 0.1,
    }
}
