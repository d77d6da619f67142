//! Engine configuration, loadable from TOML.
//!
//! # Examples
//!
//! ```
//! use trustscore_core::config::TrustConfig;
//!
//! let config = TrustConfig::from_toml("[vector]\nlookback_days = 30\n").unwrap();
//! assert_eq!(config.vector.lookback_days, 30);
//! assert_eq!(config.vector.cap, 5.0);
//! ```

mod alignment_config;
mod baseline_config;
mod confidence_config;
mod decay_config;
pub mod defaults;
mod gate_config;
mod observability_config;
mod vector_config;

pub use alignment_config::AlignmentConfig;
pub use baseline_config::BaselineConfig;
pub use confidence_config::ConfidenceConfig;
pub use decay_config::DecayConfig;
pub use gate_config::GateConfig;
pub use observability_config::ObservabilityConfig;
pub use vector_config::VectorConfig;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_WINDOW_DAYS;
use crate::errors::{TrustError, TrustResult};

/// Top-level configuration aggregating every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub decay: DecayConfig,
    pub vector: VectorConfig,
    pub baseline: BaselineConfig,
    pub gate: GateConfig,
    pub confidence: ConfidenceConfig,
    pub alignment: AlignmentConfig,
    pub observability: ObservabilityConfig,
}

impl TrustConfig {
    /// Parse from TOML. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> TrustResult<Self> {
        let config: TrustConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TrustResult<String> {
        toml::to_string(self).map_err(|e| TrustError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Reject values that would make scoring undefined.
    pub fn validate(&self) -> TrustResult<()> {
        positive("decay.half_life_days", self.decay.half_life_days)?;
        positive("vector.cap", self.vector.cap)?;
        non_negative("vector.mixed_cap", self.vector.mixed_cap)?;
        days("vector.lookback_days", self.vector.lookback_days)?;
        days("baseline.horizon_days", self.baseline.horizon_days)?;
        days("baseline.window_days", self.baseline.window_days)?;
        finite("baseline.ceiling", self.baseline.ceiling)?;
        finite("baseline.floor", self.baseline.floor)?;
        finite("baseline.neutral", self.baseline.neutral)?;
        non_negative("baseline.slope", self.baseline.slope)?;
        if self.baseline.floor > self.baseline.ceiling {
            return Err(invalid(
                "baseline.floor",
                &format!(
                    "floor {} exceeds ceiling {}",
                    self.baseline.floor, self.baseline.ceiling
                ),
            ));
        }
        non_negative("gate.delta_scale", self.gate.delta_scale)?;
        non_negative("gate.min_material_delta", self.gate.min_material_delta)?;
        non_negative("confidence.stale_after_days", self.confidence.stale_after_days)?;
        positive(
            "confidence.staleness_half_life_days",
            self.confidence.staleness_half_life_days,
        )?;
        for (field, weight) in [
            ("confidence.verified_weight", self.confidence.verified_weight),
            ("confidence.diversity_weight", self.confidence.diversity_weight),
            ("confidence.recency_weight", self.confidence.recency_weight),
        ] {
            non_negative(field, weight)?;
            if weight >= 100.0 {
                return Err(invalid(field, "a single factor must stay below 100"));
            }
        }
        finite("alignment.neutral", self.alignment.neutral)?;
        non_negative("alignment.cares_band", self.alignment.cares_band)?;
        finite("alignment.dealbreaker_floor", self.alignment.dealbreaker_floor)?;
        non_negative(
            "alignment.comparison_min_raw_delta",
            self.alignment.comparison_min_raw_delta,
        )?;
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> TrustError {
    TrustError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn days(field: &str, value: u32) -> TrustResult<()> {
    if value == 0 {
        return Err(invalid(field, "must be at least 1"));
    }
    if value > MAX_WINDOW_DAYS {
        return Err(invalid(field, &format!("must be at most {MAX_WINDOW_DAYS} days")));
    }
    Ok(())
}

fn finite(field: &str, value: f64) -> TrustResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn non_negative(field: &str, value: f64) -> TrustResult<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> TrustResult<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, "must be positive"));
    }
    Ok(())
}
