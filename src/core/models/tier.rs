//! Quality tiers
//!
//! A tier grades one rating dimension, and the same three levels are reused
//! for the final composite grade.

use serde::{Deserialize, Serialize};

/// Quality tier: Gold (1), Silver (0.5) or Bronze (0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    /// Best tier, worth 1 point
    #[default]
    Gold,
    /// Middle tier, worth half a point
    Silver,
    /// Lowest tier, worth nothing
    Bronze,
}

impl Tier {
    /// All tiers, best first
    pub const ALL: [Self; 3] = [Self::Gold, Self::Silver, Self::Bronze];

    /// Numeric score of this tier
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Gold => 1.0,
            Self::Silver => 0.5,
            Self::Bronze => 0.0,
        }
    }

    /// Score rendered the way report columns show it (`1`, `0.5`, `0`)
    #[must_use]
    pub const fn score_label(self) -> &'static str {
        match self {
            Self::Gold => "1",
            Self::Silver => "0.5",
            Self::Bronze => "0",
        }
    }

    /// Whether this tier is below Gold
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        !matches!(self, Self::Gold)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        })
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" | "1" => Ok(Self::Gold),
            "silver" | "0.5" => Ok(Self::Silver),
            "bronze" | "0" => Ok(Self::Bronze),
            _ => Err(format!("Invalid tier: {s}. Use: gold, silver, bronze")),
        }
    }
}
