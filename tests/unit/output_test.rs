//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use labelgrade::core::models::RatingPolicy;
use labelgrade::core::services::{Report, ReportRow, TaskFailure, rate_task};
use labelgrade::output::{GradeCounts, OperationResult, OutputMode, RunSummary};

use crate::common::{labeled, task};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// RunSummary Tests
// =============================================================================

fn row(id: &str, labels: &[&str]) -> ReportRow {
    let t = task(id, labels.iter().map(|l| labeled(l)).collect(), vec![]);
    let (_, rating) = rate_task(&t, &RatingPolicy::default());
    ReportRow {
        task_id: id.to_string(),
        rating,
        image_path: None,
    }
}

#[test]
fn run_summary_counts_grades() {
    let report = Report {
        rows: vec![
            row("a", &["policy_sign"]),
            row("b", &["policy_sign", "stop_sign"]),
            row("c", &["stop_sign"]),
        ],
        failures: vec![TaskFailure {
            index: 3,
            task_id: None,
            reason: "missing field `task_id`".to_string(),
        }],
        total: 4,
    };

    let summary = RunSummary::from_report(&report, "out.csv");
    assert_eq!(summary.total, 4);
    assert_eq!(summary.rated, 3);
    assert_eq!(
        summary.grades,
        GradeCounts {
            gold: 1,
            silver: 1,
            bronze: 1
        }
    );
    assert_eq!(summary.failures.len(), 1);
}

#[test]
fn run_summary_serialization() {
    let summary = RunSummary::from_report(&Report::default(), "task_ratings.csv");
    let json = serde_json::to_string(&summary).unwrap();

    assert!(json.contains("\"total\":0"));
    assert!(json.contains("\"generated_at\""));
    assert!(json.contains("\"failures\":[]"));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created config.toml".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}
