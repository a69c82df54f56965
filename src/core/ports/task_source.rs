//! Task source port
//!
//! Defines the interface for retrieving raw task records by id.

/// Source of raw task records
///
/// Records are returned undecoded; decoding and validation happen when the
/// records are rated.
pub trait TaskSource: Send + Sync {
    /// Fetch one task record
    fn fetch_task(&self, task_id: &str) -> anyhow::Result<serde_json::Value>;
}
