//! labelgrade - A CLI tool to grade the quality of machine-annotated image-labeling tasks
//!
//! This library provides the scoring engine that turns a task's annotations and
//! audit history into per-dimension tiers and a composite grade, plus the
//! adapters that load tasks, fetch them from a labeling API, draw annotated
//! images and write the CSV report.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
