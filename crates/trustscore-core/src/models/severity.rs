use serde::{Deserialize, Serialize};

use crate::event::SeverityLevel;

/// UI badge carried alongside a severity level; doubles as the trust signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Info,
    Warn,
    Danger,
}

impl Badge {
    pub fn for_level(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Informational => Badge::Info,
            SeverityLevel::Minor | SeverityLevel::Moderate => Badge::Warn,
            SeverityLevel::Severe => Badge::Danger,
        }
    }
}

/// Output of a severity policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: SeverityLevel,
    pub reason: String,
    pub badge: Badge,
}

impl SeverityAssessment {
    pub fn new(level: SeverityLevel, reason: impl Into<String>) -> Self {
        Self {
            level,
            reason: reason.into(),
            badge: Badge::for_level(level),
        }
    }
}
