//! Report assembler
//!
//! Runs the rating pipeline over a collection of task records and pairs each
//! rating with its annotated image. Failures are per task: a malformed record
//! or a failed image produces a [`TaskFailure`] instead of a row, and the
//! remaining tasks are still processed.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use crate::core::models::{RatingPolicy, RatingResult, Task, TaskError, Tier};
use crate::core::ports::ImageAnnotator;

use super::aggregator::rate_task;

/// One fully rated task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Task identifier
    pub task_id: String,
    /// Rating of the task
    pub rating: RatingResult,
    /// Annotated image, unless images were skipped
    pub image_path: Option<PathBuf>,
}

/// A task that could not be rated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFailure {
    /// Position of the record in the input
    pub index: usize,
    /// Task id, when known
    pub task_id: Option<String>,
    /// Why the task failed
    pub reason: String,
}

impl From<TaskError> for TaskFailure {
    fn from(err: TaskError) -> Self {
        Self {
            index: err.index(),
            task_id: err.task_id().map(String::from),
            reason: err.to_string(),
        }
    }
}

/// Outcome of rating a collection of tasks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Rated tasks, in input order
    pub rows: Vec<ReportRow>,
    /// Tasks that failed, in input order
    pub failures: Vec<TaskFailure>,
    /// Number of input records
    pub total: usize,
}

impl Report {
    /// Number of tasks that produced a complete row
    #[must_use]
    pub const fn rated(&self) -> usize {
        self.rows.len()
    }

    /// Whether every input record produced a row
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of rows with the given final grade
    #[must_use]
    pub fn grade_count(&self, grade: Tier) -> usize {
        self.rows.iter().filter(|r| r.rating.grade == grade).count()
    }
}

fn process(
    index: usize,
    record: Result<Task, TaskError>,
    policy: &RatingPolicy,
    annotator: &dyn ImageAnnotator,
) -> Result<ReportRow, TaskFailure> {
    let task = record?;
    let (enriched, rating) = rate_task(&task, policy);

    let image_path = annotator.annotate(&enriched).map_err(|e| TaskFailure {
        index,
        task_id: Some(task.task_id.clone()),
        reason: format!("image annotation failed: {e:#}"),
    })?;

    Ok(ReportRow {
        task_id: task.task_id,
        rating,
        image_path,
    })
}

/// Rate every record and collect rows and failures
///
/// With `parallel` set, tasks are rated on the rayon thread pool; the report
/// keeps input order either way.
#[must_use]
pub fn assemble(
    records: Vec<Result<Task, TaskError>>,
    policy: &RatingPolicy,
    annotator: &dyn ImageAnnotator,
    parallel: bool,
) -> Report {
    let total = records.len();
    let outcomes: Vec<Result<ReportRow, TaskFailure>> = if parallel {
        records
            .into_par_iter()
            .enumerate()
            .map(|(index, record)| process(index, record, policy, annotator))
            .collect()
    } else {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| process(index, record, policy, annotator))
            .collect()
    };

    let mut report = Report {
        total,
        ..Report::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(row) => report.rows.push(row),
            Err(failure) => {
                log::warn!(
                    "skipping task #{} ({}): {}",
                    failure.index,
                    failure.task_id.as_deref().unwrap_or("unknown id"),
                    failure.reason
                );
                report.failures.push(failure);
            },
        }
    }

    log::info!("rated {} of {} task(s)", report.rated(), report.total);
    report
}
