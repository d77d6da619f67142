/// Source credibility clamped to 0..1; non-finite values carry no weight.
pub fn credibility_factor(credibility: f64) -> f64 {
    if credibility.is_finite() {
        credibility.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
