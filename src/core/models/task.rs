//! Task model
//!
//! A task is one labeling job: an image, the annotations drawn on it and the
//! history of human audits. Records are decoded strictly: a record missing
//! its id, image reference or annotation list is rejected, never defaulted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Annotation, Audit};

/// Errors raised for an individual task record
#[derive(Debug, Error)]
pub enum TaskError {
    /// The record does not have the expected shape
    #[error("malformed task record #{index}{}: {message}", task_label(.task_id.as_deref()))]
    Malformed {
        /// Position of the record in the input collection
        index: usize,
        /// Task id, when the record carried a readable one
        task_id: Option<String>,
        /// What was wrong with the record
        message: String,
    },
}

fn task_label(task_id: Option<&str>) -> String {
    task_id.map(|id| format!(" ({id})")).unwrap_or_default()
}

impl TaskError {
    /// Position of the failing record in the input
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Malformed { index, .. } => *index,
        }
    }

    /// Task id of the failing record, if known
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Self::Malformed { task_id, .. } => task_id.as_deref(),
        }
    }
}

/// One labeling job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier
    pub task_id: String,
    /// Task inputs
    pub params: TaskParams,
    /// Labeler output
    pub response: TaskResponse,
    /// Human reviews; absent means none
    #[serde(default)]
    pub audits: Vec<Audit>,
}

/// Task inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskParams {
    /// URL (or local path) of the image that was labeled
    pub attachment: String,
}

/// Labeler output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Bounding boxes in labeler order
    pub annotations: Vec<Annotation>,
}

impl Task {
    /// Create a task from its parts
    #[must_use]
    pub fn new(
        task_id: impl Into<String>,
        attachment: impl Into<String>,
        annotations: Vec<Annotation>,
        audits: Vec<Audit>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            params: TaskParams {
                attachment: attachment.into(),
            },
            response: TaskResponse { annotations },
            audits,
        }
    }

    /// Image reference of the task
    #[must_use]
    pub fn attachment(&self) -> &str {
        &self.params.attachment
    }

    /// Annotations in labeler order
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.response.annotations
    }

    /// Decode a raw JSON record, attributing failures to `index`
    pub fn from_value(index: usize, value: serde_json::Value) -> Result<Self, TaskError> {
        let task_id = value.get("task_id").and_then(serde_json::Value::as_str).map(String::from);
        serde_json::from_value(value).map_err(|e| TaskError::Malformed {
            index,
            task_id,
            message: e.to_string(),
        })
    }
}
