//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Tier;
use crate::core::services::{FetchOutcome, Report};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Count of tasks per final grade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeCounts {
    /// Tasks graded Gold
    pub gold: usize,
    /// Tasks graded Silver
    pub silver: usize,
    /// Tasks graded Bronze
    pub bronze: usize,
}

/// A task that did not make it into the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureInfo {
    /// Task id, when known
    pub task_id: Option<String>,
    /// Position in the input, when the failure came from a task file
    pub index: Option<usize>,
    /// Why it failed
    pub reason: String,
}

/// Summary of a `rate` run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// When the report was produced (RFC 3339)
    pub generated_at: String,
    /// Number of input records
    pub total: usize,
    /// Number of records that produced a complete row
    pub rated: usize,
    /// Final grade distribution
    pub grades: GradeCounts,
    /// Where the CSV report was written
    pub report_path: String,
    /// Records that failed
    pub failures: Vec<FailureInfo>,
}

/// Summary of a `fetch` run
#[derive(Debug, Serialize)]
pub struct FetchSummary {
    /// Number of ids requested
    pub requested: usize,
    /// Number of records fetched
    pub fetched: usize,
    /// Where the records were written
    pub output_path: String,
    /// Ids that were skipped
    pub failures: Vec<FailureInfo>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Colour a grade for terminal output, left-aligned to `width` columns
///
/// Padding is applied before colouring so escape codes do not count
/// towards the width.
#[must_use]
pub fn colored_grade(grade: Tier, width: usize) -> String {
    let label = format!("{grade:<width$}");
    match grade {
        Tier::Gold => label.yellow().bold().to_string(),
        Tier::Silver => label.white().bold().to_string(),
        Tier::Bronze => label.red().bold().to_string(),
    }
}

impl RunSummary {
    /// Build a summary from an assembled report
    #[must_use]
    pub fn from_report(report: &Report, report_path: &str) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            total: report.total,
            rated: report.rated(),
            grades: GradeCounts {
                gold: report.grade_count(Tier::Gold),
                silver: report.grade_count(Tier::Silver),
                bronze: report.grade_count(Tier::Bronze),
            },
            report_path: report_path.to_string(),
            failures: report
                .failures
                .iter()
                .map(|f| FailureInfo {
                    task_id: f.task_id.clone(),
                    index: Some(f.index),
                    reason: f.reason.clone(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.total == 0 {
            println!("No tasks to rate.");
            return;
        }

        println!("Rated {} of {} task(s).\n", self.rated, self.total);
        println!("  {} {}", colored_grade(Tier::Gold, 8), self.grades.gold);
        println!("  {} {}", colored_grade(Tier::Silver, 8), self.grades.silver);
        println!("  {} {}", colored_grade(Tier::Bronze, 8), self.grades.bronze);

        if !self.failures.is_empty() {
            println!("\nFailed:");
            for f in &self.failures {
                let index = f.index.map(|i| format!("#{i}")).unwrap_or_default();
                println!("  {index} {}", f.task_id.as_deref().unwrap_or("(no task id)"));
                println!("          {}", f.reason);
            }
        }

        println!("\nReport written to {}", self.report_path);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl FetchSummary {
    /// Build a summary from a fetch outcome
    #[must_use]
    pub fn from_outcome(requested: usize, outcome: &FetchOutcome, output_path: &str) -> Self {
        Self {
            requested,
            fetched: outcome.records.len(),
            output_path: output_path.to_string(),
            failures: outcome
                .failures
                .iter()
                .map(|f| FailureInfo {
                    task_id: Some(f.task_id.clone()),
                    index: None,
                    reason: f.reason.clone(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Fetched {} of {} task(s).", self.fetched, self.requested);

        if !self.failures.is_empty() {
            println!("\nSkipped:");
            for f in &self.failures {
                println!("  {}", f.task_id.as_deref().unwrap_or_default());
                println!("          {}", f.reason);
            }
        }

        println!("\nTasks written to {}", self.output_path);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
