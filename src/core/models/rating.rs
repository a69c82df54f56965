//! Rating results
//!
//! A [`RatingResult`] is produced once per task by the aggregator and never
//! changed afterwards.

use serde::Serialize;

use super::Tier;

/// The four independently scored quality dimensions, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Share of audits that rejected the task
    Audit,
    /// Share of boxes whose area deviates from the task mean
    Area,
    /// Share of boxes whose label is not permitted
    Label,
    /// Share of boxes with heavy occlusion
    Occlusion,
}

impl Dimension {
    /// All dimensions in the fixed issue-reporting order
    pub const ALL: [Self; 4] = [Self::Audit, Self::Area, Self::Label, Self::Occlusion];

    /// Prefix used for this dimension's issue description
    #[must_use]
    pub const fn issue_label(self) -> &'static str {
        match self {
            Self::Audit => "Audit rejection rate",
            Self::Area => "Bounding box area deviation issues",
            Self::Label => "Label accuracy issues",
            Self::Occlusion => "High occlusion rate",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audit => write!(f, "audit"),
            Self::Area => write!(f, "area"),
            Self::Label => write!(f, "label"),
            Self::Occlusion => write!(f, "occlusion"),
        }
    }
}

/// Score of a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScore {
    /// Which dimension was scored
    pub dimension: Dimension,
    /// Share of offending items, 0-100
    pub issue_percentage: f64,
    /// Resulting tier
    pub tier: Tier,
}

impl DimensionScore {
    /// Human-readable issue, present only when the tier is below Gold
    #[must_use]
    pub fn issue(&self) -> Option<String> {
        self.tier
            .is_degraded()
            .then(|| format!("{}: {:.2}%", self.dimension.issue_label(), self.issue_percentage))
    }
}

/// Scores of all four dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    /// Audit rejection score
    pub audit: DimensionScore,
    /// Area deviation score
    pub area: DimensionScore,
    /// Label validity score
    pub label: DimensionScore,
    /// Occlusion score
    pub occlusion: DimensionScore,
}

impl DimensionScores {
    /// Scores in the fixed order audit, area, label, occlusion
    #[must_use]
    pub const fn ordered(&self) -> [DimensionScore; 4] {
        [self.audit, self.area, self.label, self.occlusion]
    }
}

/// Final rating of one task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingResult {
    /// Per-dimension scores
    pub scores: DimensionScores,
    /// Unweighted mean of the four tier scores
    pub final_score: f64,
    /// Grade derived from the final score
    pub grade: Tier,
    /// Issue descriptions, in dimension order
    pub issues: Vec<String>,
}

impl RatingResult {
    /// Audit tier
    #[must_use]
    pub const fn audit_tier(&self) -> Tier {
        self.scores.audit.tier
    }

    /// Area tier
    #[must_use]
    pub const fn area_tier(&self) -> Tier {
        self.scores.area.tier
    }

    /// Label tier
    #[must_use]
    pub const fn label_tier(&self) -> Tier {
        self.scores.label.tier
    }

    /// Occlusion tier
    #[must_use]
    pub const fn occlusion_tier(&self) -> Tier {
        self.scores.occlusion.tier
    }

    /// Issues joined the way the report shows them
    #[must_use]
    pub fn issues_joined(&self) -> String {
        self.issues.join("; ")
    }
}
