//! Area-deviation detector
//!
//! Flags bounding boxes whose area is far from the task's mean box area.
//! Detection never mutates its input: it returns enriched copies, and the
//! classifier only accepts the enriched form, so scoring cannot run on
//! un-enriched annotations by accident.

use crate::core::models::{Annotation, AreaIssue, Task};

/// A task whose annotations carry up-to-date area-deviation markers
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTask {
    task: Task,
}

impl EnrichedTask {
    /// The enriched task
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Enriched annotations, in input order
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        self.task.annotations()
    }

    /// Number of annotations carrying an area-deviation marker
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.annotations().iter().filter(|a| a.is_flagged()).count()
    }
}

/// Arithmetic mean of the box areas, 0 for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_area(annotations: &[Annotation]) -> f64 {
    if annotations.is_empty() {
        return 0.0;
    }
    annotations.iter().map(Annotation::area).sum::<f64>() / annotations.len() as f64
}

/// Relative deviation `|area - mean| / mean`, defined as 0 when the mean is 0
#[must_use]
pub const fn relative_deviation(area: f64, mean: f64) -> f64 {
    if mean > 0.0 { (area - mean).abs() / mean } else { 0.0 }
}

/// Return copies of `annotations` with area-deviation markers recomputed
///
/// A box is flagged when its relative deviation is strictly greater than
/// `threshold`. Existing markers are overwritten or cleared, so applying this
/// twice yields the same result as applying it once.
#[must_use]
pub fn flag_area_deviations(annotations: &[Annotation], threshold: f64) -> Vec<Annotation> {
    let mean = mean_area(annotations);
    annotations
        .iter()
        .map(|annotation| {
            let deviation = relative_deviation(annotation.area(), mean);
            let mut enriched = annotation.clone();
            enriched.area_issue = (deviation > threshold).then_some(AreaIssue {
                deviation_percent: deviation * 100.0,
            });
            enriched
        })
        .collect()
}

/// Run the detector over a whole task
#[must_use]
pub fn enrich(task: &Task, threshold: f64) -> EnrichedTask {
    let mut enriched = task.clone();
    enriched.response.annotations = flag_area_deviations(task.annotations(), threshold);

    let flagged = enriched.response.annotations.iter().filter(|a| a.is_flagged()).count();
    if flagged > 0 {
        log::debug!(
            "task {}: {flagged} of {} box(es) deviate from mean area",
            task.task_id,
            enriched.response.annotations.len()
        );
    }

    EnrichedTask { task: enriched }
}
