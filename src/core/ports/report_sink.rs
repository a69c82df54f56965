//! Report sink port
//!
//! Defines the interface for persisting a rating report.

use crate::core::services::Report;

/// Destination for rated rows
pub trait ReportSink {
    /// Write every successfully rated row of `report`, in order
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}
