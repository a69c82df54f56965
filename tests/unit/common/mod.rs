//! Shared test fixtures and helpers
//!
//! Builders for task records in the wire format consumed by the task loader.

use labelgrade::core::models::{Annotation, Audit, AuditResult, Task};
use serde_json::{Value, json};

/// A square box of the given side with a permitted label
pub fn square(side: f64) -> Annotation {
    Annotation::new(0.0, 0.0, side, side, "traffic_control_sign")
}

/// A box with the given label
pub fn labeled(label: &str) -> Annotation {
    Annotation::new(0.0, 0.0, 10.0, 10.0, label)
}

/// A box with the given occlusion value
pub fn occluded(occlusion: &str) -> Annotation {
    labeled("policy_sign").with_occlusion(occlusion)
}

/// Audits from a list of `"accepted"` / `"rejected"` strings
pub fn audits(results: &[&str]) -> Vec<Audit> {
    results
        .iter()
        .map(|r| Audit::new(AuditResult::from((*r).to_string())))
        .collect()
}

/// A task with the given annotations and audits
pub fn task(id: &str, annotations: Vec<Annotation>, audits: Vec<Audit>) -> Task {
    Task::new(id, format!("https://example.com/{id}.png"), annotations, audits)
}

/// A raw task record as returned by the labeling API
pub fn record(id: &str, attachment: &str, annotations: Value, audits: Value) -> Value {
    json!({
        "task_id": id,
        "type": "imageannotation",
        "status": "completed",
        "params": {"attachment": attachment, "attachment_type": "image"},
        "response": {"annotations": annotations},
        "audits": audits
    })
}

/// A raw annotation
pub fn raw_box(left: f64, top: f64, width: f64, height: f64, label: &str, occlusion: &str) -> Value {
    json!({
        "left": left,
        "top": top,
        "width": width,
        "height": height,
        "label": label,
        "attributes": {"occlusion": occlusion, "truncation": "0%"}
    })
}
