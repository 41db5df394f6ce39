//! Volatility-to-risk-tier classification.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::movers::Mover;
use crate::{Symbol, ValidationError};

/// Coarse risk bucket derived from a volatility magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classify an absolute percent change.
    ///
    /// Both boundaries belong to Medium: exactly 2.0 and exactly 5.0
    /// classify as Medium.
    pub fn classify(volatility: f64) -> Self {
        if volatility < 2.0 {
            Self::Low
        } else if volatility <= 5.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for RiskTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ValidationError::InvalidRiskTier {
                value: other.to_owned(),
            }),
        }
    }
}

/// A ranked mover annotated with its risk tier; the allocator's input unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub symbol: Symbol,
    pub risk_tier: RiskTier,
    /// Absolute percent change; always non-negative.
    pub volatility: f64,
}

impl Candidate {
    pub fn from_mover(mover: &Mover) -> Self {
        let volatility = mover.percent_change.abs();
        Self {
            symbol: mover.symbol.clone(),
            risk_tier: RiskTier::classify(volatility),
            volatility,
        }
    }
}
