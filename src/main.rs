//! labelgrade - A CLI tool to grade the quality of machine-annotated image-labeling tasks
//!
//! Rates each task on audit outcome, bounding-box area consistency, label
//! validity and occlusion, then writes a CSV report with annotated images.

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

mod cli;
mod commands;

/// Main entry point for the labelgrade CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
