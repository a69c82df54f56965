//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the scoring engine and the
//! outside world (labeling API, image storage, report files).
//!
//! Implementations live in the `adapters` module.

mod image_annotator;
mod report_sink;
mod task_source;

pub use image_annotator::ImageAnnotator;
pub use report_sink::ReportSink;
pub use task_source::TaskSource;
