//! JSON task files
//!
//! Reads and writes the task dump produced by the fetch step: a JSON array
//! of raw task records. Each record is decoded on its own, so a malformed
//! record only fails its own row.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{Task, TaskError};

/// Errors that make a whole task file unusable
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read or written
    #[error("cannot access {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is neither an array nor a single task object
    #[error("expected a JSON array of task records, found {0}")]
    UnexpectedShape(&'static str),
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Decode task records from JSON text
///
/// A single top-level object is accepted as a one-task collection, which is
/// what the labeling API returns for a single id.
pub fn parse_tasks(content: &str) -> Result<Vec<Result<Task, TaskError>>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let records = match value {
        serde_json::Value::Array(records) => records,
        object @ serde_json::Value::Object(_) => vec![object],
        other => return Err(LoadError::UnexpectedShape(kind_of(&other))),
    };

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Task::from_value(index, record))
        .collect())
}

/// Read and decode a task file
pub fn load_tasks(path: &Path) -> Result<Vec<Result<Task, TaskError>>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tasks = parse_tasks(&content)?;
    log::debug!("loaded {} task record(s) from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Write raw task records as a pretty-printed JSON array
pub fn save_records(path: &Path, records: &[serde_json::Value]) -> Result<(), LoadError> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
