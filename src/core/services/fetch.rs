//! Task collection
//!
//! Pulls raw task records from a [`TaskSource`], skipping ids that fail so a
//! single bad id never aborts the whole collection.

use serde::Serialize;

use crate::core::ports::TaskSource;

/// A task id that could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    /// The id that failed
    pub task_id: String,
    /// Why it failed
    pub reason: String,
}

/// Result of collecting a batch of tasks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchOutcome {
    /// Records that were fetched, in request order
    pub records: Vec<serde_json::Value>,
    /// Ids that were skipped
    pub failures: Vec<FetchFailure>,
}

/// Fetch every id in order, logging and skipping failures
#[must_use]
pub fn collect_tasks(source: &dyn TaskSource, task_ids: &[String]) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    for task_id in task_ids {
        match source.fetch_task(task_id) {
            Ok(record) => {
                log::debug!("fetched task {task_id}");
                outcome.records.push(record);
            },
            Err(e) => {
                log::warn!("failed to fetch task {task_id}: {e:#}");
                outcome.failures.push(FetchFailure {
                    task_id: task_id.clone(),
                    reason: format!("{e:#}"),
                });
            },
        }
    }

    outcome
}
