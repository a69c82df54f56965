//! Image annotator port
//!
//! Defines the interface for producing an annotated copy of a task's image.

use std::path::PathBuf;

use crate::core::services::EnrichedTask;

/// Produces an image with the task's bounding boxes drawn on it
///
/// Implementations must be safe to call from several worker threads at once,
/// including for the same task id.
pub trait ImageAnnotator: Send + Sync {
    /// Draw the task's boxes and return the path of the annotated image
    ///
    /// Flagged boxes are outlined in red, others in blue. Returns `Ok(None)`
    /// when the annotator deliberately produces no image.
    fn annotate(&self, task: &EnrichedTask) -> anyhow::Result<Option<PathBuf>>;
}
