//! Composite rating aggregator
//!
//! Averages the four dimension tiers into a final score and grade.

use crate::core::models::{DimensionScore, DimensionScores, RatingPolicy, RatingResult, Task};

use super::classifier::classify;
use super::deviation::{EnrichedTask, enrich};

/// Combine dimension scores into the final rating
#[must_use]
pub fn aggregate(scores: DimensionScores, policy: &RatingPolicy) -> RatingResult {
    let ordered = scores.ordered();
    let final_score = ordered.iter().map(|s| s.tier.score()).sum::<f64>() / 4.0;
    let issues = ordered.iter().filter_map(DimensionScore::issue).collect();

    RatingResult {
        scores,
        final_score,
        grade: policy.grades.grade_for(final_score),
        issues,
    }
}

/// Run detector, classifier and aggregator over one task
///
/// Returns the enriched task alongside its rating so callers can draw the
/// flagged boxes.
#[must_use]
pub fn rate_task(task: &Task, policy: &RatingPolicy) -> (EnrichedTask, RatingResult) {
    let enriched = enrich(task, policy.area_deviation_threshold);
    let rating = aggregate(classify(&enriched, policy), policy);
    log::debug!(
        "task {}: score {:.3} -> {}",
        task.task_id,
        rating.final_score,
        rating.grade
    );
    (enriched, rating)
}
