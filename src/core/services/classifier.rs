//! Dimension-rating classifier
//!
//! Scores a task on four independent dimensions. Each dimension reduces to
//! an issue percentage, which the shared tier cutoffs turn into a tier.

use crate::core::models::{Dimension, DimensionScore, DimensionScores, RatingPolicy};

use super::deviation::EnrichedTask;

/// Share of `count` in `total` as a percentage; 0 when `total` is 0
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn issue_percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

fn score(dimension: Dimension, count: usize, total: usize, policy: &RatingPolicy) -> DimensionScore {
    let issue_percentage = issue_percentage(count, total);
    DimensionScore {
        dimension,
        issue_percentage,
        tier: policy.tiers.tier_for(issue_percentage),
    }
}

/// Score all four dimensions of an enriched task
#[must_use]
pub fn classify(task: &EnrichedTask, policy: &RatingPolicy) -> DimensionScores {
    let audits = &task.task().audits;
    let annotations = task.annotations();
    let total = annotations.len();

    let rejected = audits.iter().filter(|a| a.is_rejected()).count();
    let bad_labels = annotations.iter().filter(|a| !policy.is_permitted_label(&a.label)).count();
    let occluded = annotations.iter().filter(|a| policy.is_occlusion_issue(a.occlusion())).count();

    DimensionScores {
        audit: score(Dimension::Audit, rejected, audits.len(), policy),
        area: score(Dimension::Area, task.flagged_count(), total, policy),
        label: score(Dimension::Label, bad_labels, total, policy),
        occlusion: score(Dimension::Occlusion, occluded, total, policy),
    }
}
