//! End-to-end tests for the rating pipeline
//!
//! Detector, classifier and aggregator run together on realistic tasks.

use labelgrade::core::models::{RatingPolicy, Tier};
use labelgrade::core::services::rate_task;

use crate::common::{audits, labeled, occluded, square, task};

// =============================================================================
// WORKED EXAMPLES
// =============================================================================

#[test]
fn half_rejected_audits_is_silver() {
    let t = task("t", vec![], audits(&["rejected", "rejected", "accepted", "accepted"]));
    let (_, rating) = rate_task(&t, &RatingPolicy::default());

    assert_eq!(rating.audit_tier(), Tier::Silver);
    assert_eq!(rating.issues, vec!["Audit rejection rate: 50.00%"]);
}

#[test]
fn one_huge_box_flags_every_box() {
    let t = task("t", vec![square(10.0), square(10.0), square(10.0), square(100.0)], vec![]);
    let (enriched, rating) = rate_task(&t, &RatingPolicy::default());

    assert_eq!(enriched.flagged_count(), 4);
    assert_eq!(rating.area_tier(), Tier::Bronze);
    assert_eq!(rating.issues, vec!["Bounding box area deviation issues: 100.00%"]);
    // (1 + 0 + 1 + 1) / 4
    assert!((rating.final_score - 0.75).abs() < f64::EPSILON);
    assert_eq!(rating.grade, Tier::Bronze);
}

#[test]
fn half_unknown_labels_is_silver() {
    let t = task("t", vec![labeled("traffic_control_sign"), labeled("stop_sign")], vec![]);
    let (_, rating) = rate_task(&t, &RatingPolicy::default());

    assert_eq!(rating.label_tier(), Tier::Silver);
    assert_eq!(rating.issues, vec!["Label accuracy issues: 50.00%"]);
    assert_eq!(rating.grade, Tier::Silver);
}

#[test]
fn empty_task_is_gold() {
    let (_, rating) = rate_task(&task("t", vec![], vec![]), &RatingPolicy::default());

    assert_eq!(rating.grade, Tier::Gold);
    assert!((rating.final_score - 1.0).abs() < f64::EPSILON);
    assert!(rating.issues.is_empty());
}

// =============================================================================
// MIXED DIMENSIONS
// =============================================================================

#[test]
fn issues_follow_dimension_order() {
    let t = task(
        "t",
        vec![occluded("100%"), occluded("75%"), labeled("stop_sign").with_occlusion("50%")],
        audits(&["rejected", "rejected", "rejected", "rejected", "accepted"]),
    );
    let (_, rating) = rate_task(&t, &RatingPolicy::default());

    // one unknown label out of three stays Gold, so it reports nothing
    assert_eq!(
        rating.issues,
        vec!["Audit rejection rate: 80.00%", "High occlusion rate: 100.00%"]
    );
    assert_eq!(rating.audit_tier(), Tier::Bronze);
    assert_eq!(rating.label_tier(), Tier::Gold);
    assert_eq!(rating.occlusion_tier(), Tier::Bronze);
    assert_eq!(rating.grade, Tier::Bronze);
}

#[test]
fn negative_sizes_count_by_magnitude() {
    let mut flipped = square(10.0);
    flipped.width = -10.0;
    flipped.height = -10.0;
    let t = task("t", vec![square(10.0), flipped], vec![]);
    let (enriched, rating) = rate_task(&t, &RatingPolicy::default());

    assert_eq!(enriched.flagged_count(), 0);
    assert_eq!(rating.area_tier(), Tier::Gold);
}

#[test]
fn policy_changes_apply_without_code_changes() {
    let mut policy = RatingPolicy::default();
    policy.occlusion_issues.insert("25%".to_string());
    let t = task("t", vec![occluded("25%"), occluded("25%")], vec![]);

    let (_, default_rating) = rate_task(&t, &RatingPolicy::default());
    let (_, strict_rating) = rate_task(&t, &policy);

    assert_eq!(default_rating.occlusion_tier(), Tier::Gold);
    assert_eq!(strict_rating.occlusion_tier(), Tier::Bronze);
}

#[test]
fn input_task_is_not_mutated() {
    let t = task("t", vec![square(10.0), square(10.0), square(10.0), square(100.0)], vec![]);
    let before = t.clone();
    let _ = rate_task(&t, &RatingPolicy::default());
    assert_eq!(t, before);
}
