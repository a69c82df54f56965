//! Audit model
//!
//! A human review of a task. Only the outcome matters for scoring.

use serde::{Deserialize, Serialize};

/// One human review of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    /// Review outcome
    pub audit_result: AuditResult,
}

/// Outcome of an audit
///
/// Values other than `accepted` and `rejected` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditResult {
    /// Reviewer accepted the task
    Accepted,
    /// Reviewer rejected the task
    Rejected,
    /// Any other outcome reported by the labeling platform
    Other(String),
}

impl Audit {
    /// Create an audit with the given outcome
    #[must_use]
    pub const fn new(audit_result: AuditResult) -> Self {
        Self { audit_result }
    }

    /// Whether this audit rejected the task
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.audit_result, AuditResult::Rejected)
    }
}

impl From<String> for AuditResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<AuditResult> for String {
    fn from(value: AuditResult) -> Self {
        match value {
            AuditResult::Accepted => "accepted".to_string(),
            AuditResult::Rejected => "rejected".to_string(),
            AuditResult::Other(s) => s,
        }
    }
}
