//! Domain models for labelgrade
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - One labeling job with its annotations and audits
//! - [`Annotation`] - A labeled bounding box
//! - [`Audit`] - A human review outcome
//! - [`Tier`] - Gold / Silver / Bronze
//! - [`RatingPolicy`] - Thresholds and label sets driving the scoring
//! - [`RatingResult`] - Per-task scores, grade and issues

mod annotation;
mod audit;
mod policy;
mod rating;
mod task;
mod tier;

pub use annotation::{AreaIssue, Attributes, DEFAULT_OCCLUSION, Annotation};
pub use audit::{Audit, AuditResult};
pub use policy::{
    DEFAULT_AREA_DEVIATION_THRESHOLD, DEFAULT_OCCLUSION_ISSUES, DEFAULT_PERMITTED_LABELS,
    GradeThresholds, RatingPolicy, TierThresholds,
};
pub use rating::{Dimension, DimensionScore, DimensionScores, RatingResult};
pub use task::{Task, TaskError, TaskParams, TaskResponse};
pub use tier::Tier;
