//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Services never
//! touch the network or the filesystem themselves; they go through the port
//! traits.
//!
//! - [`deviation`] - Flag boxes whose area deviates from the task mean
//! - [`classifier`] - Score the four quality dimensions
//! - [`aggregator`] - Combine dimension tiers into a final grade
//! - [`report`] - Rate a task collection and pair rows with images
//! - [`fetch`] - Collect raw task records, skipping failed ids

pub mod aggregator;
pub mod classifier;
pub mod deviation;
pub mod fetch;
pub mod report;

pub use aggregator::{aggregate, rate_task};
pub use classifier::{classify, issue_percentage};
pub use deviation::{EnrichedTask, enrich, flag_area_deviations, mean_area, relative_deviation};
pub use fetch::{FetchFailure, FetchOutcome, collect_tasks};
pub use report::{Report, ReportRow, TaskFailure, assemble};
