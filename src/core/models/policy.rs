//! Rating policy
//!
//! Every threshold and label set that drives scoring lives here so that the
//! rules can be tuned from the config file and tested in isolation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Tier;

/// Labels accepted by the label dimension unless configured otherwise
pub const DEFAULT_PERMITTED_LABELS: [&str; 5] = [
    "traffic_control_sign",
    "construction_sign",
    "information_sign",
    "policy_sign",
    "non_visible_face",
];

/// Occlusion values counted as issues unless configured otherwise
///
/// `"25%"` is deliberately absent: only these discrete labels count.
pub const DEFAULT_OCCLUSION_ISSUES: [&str; 3] = ["50%", "75%", "100%"];

/// Relative deviation above which a bounding box area is flagged
pub const DEFAULT_AREA_DEVIATION_THRESHOLD: f64 = 0.90;

/// Cutoffs mapping an issue percentage (0-100) to a tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Issue percentage at or above which a dimension is Bronze
    pub bronze_at: f64,
    /// Issue percentage at or above which a dimension is Silver
    pub silver_at: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            bronze_at: 80.0,
            silver_at: 50.0,
        }
    }
}

impl TierThresholds {
    /// Tier for an issue percentage; both cutoffs are inclusive
    #[must_use]
    pub const fn tier_for(&self, issue_percentage: f64) -> Tier {
        if issue_percentage >= self.bronze_at {
            Tier::Bronze
        } else if issue_percentage >= self.silver_at {
            Tier::Silver
        } else {
            Tier::Gold
        }
    }
}

/// Cutoffs mapping a composite score (0-1) to a final grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    /// Score at or above which the final grade is Gold
    pub gold_at: f64,
    /// Score at or above which the final grade is Silver
    pub silver_at: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            gold_at: 0.9,
            silver_at: 0.8,
        }
    }
}

impl GradeThresholds {
    /// Final grade for a composite score; both cutoffs are inclusive
    #[must_use]
    pub const fn grade_for(&self, final_score: f64) -> Tier {
        if final_score >= self.gold_at {
            Tier::Gold
        } else if final_score >= self.silver_at {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }
}

/// Complete scoring policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingPolicy {
    /// Relative area deviation (0.90 = 90%) above which an annotation is flagged
    pub area_deviation_threshold: f64,
    /// Labels an annotation may carry
    pub permitted_labels: BTreeSet<String>,
    /// Occlusion values that count as an issue
    pub occlusion_issues: BTreeSet<String>,
    /// Issue-percentage cutoffs shared by all four dimensions
    pub tiers: TierThresholds,
    /// Composite score cutoffs for the final grade
    pub grades: GradeThresholds,
}

impl Default for RatingPolicy {
    fn default() -> Self {
        Self {
            area_deviation_threshold: DEFAULT_AREA_DEVIATION_THRESHOLD,
            permitted_labels: DEFAULT_PERMITTED_LABELS.iter().map(|s| (*s).to_string()).collect(),
            occlusion_issues: DEFAULT_OCCLUSION_ISSUES.iter().map(|s| (*s).to_string()).collect(),
            tiers: TierThresholds::default(),
            grades: GradeThresholds::default(),
        }
    }
}

impl RatingPolicy {
    /// Whether `label` belongs to the permitted set
    #[must_use]
    pub fn is_permitted_label(&self, label: &str) -> bool {
        self.permitted_labels.contains(label)
    }

    /// Whether an occlusion value counts as an issue
    #[must_use]
    pub fn is_occlusion_issue(&self, occlusion: &str) -> bool {
        self.occlusion_issues.contains(occlusion)
    }

    /// Check that thresholds are ordered and within range
    pub fn validate(&self) -> Result<(), String> {
        if !self.area_deviation_threshold.is_finite() || self.area_deviation_threshold < 0.0 {
            return Err(format!(
                "area_deviation_threshold must be a non-negative number, got {}",
                self.area_deviation_threshold
            ));
        }
        let tiers = &self.tiers;
        if !(0.0..=100.0).contains(&tiers.silver_at)
            || !(0.0..=100.0).contains(&tiers.bronze_at)
            || tiers.silver_at > tiers.bronze_at
        {
            return Err(format!(
                "tier cutoffs must satisfy 0 <= silver_at ({}) <= bronze_at ({}) <= 100",
                tiers.silver_at, tiers.bronze_at
            ));
        }
        let grades = &self.grades;
        if !(0.0..=1.0).contains(&grades.silver_at)
            || !(0.0..=1.0).contains(&grades.gold_at)
            || grades.silver_at > grades.gold_at
        {
            return Err(format!(
                "grade cutoffs must satisfy 0 <= silver_at ({}) <= gold_at ({}) <= 1",
                grades.silver_at, grades.gold_at
            ));
        }
        Ok(())
    }
}
