//! Property-based tests for the rating engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use labelgrade::core::models::{Annotation, RatingPolicy, Tier};
use labelgrade::core::services::{flag_area_deviations, mean_area, rate_task, relative_deviation};
use proptest::prelude::*;

use crate::common::{audits, task};

fn annotation() -> impl Strategy<Value = Annotation> {
    (
        -500.0..500.0f64,
        -500.0..500.0f64,
        -200.0..200.0f64,
        -200.0..200.0f64,
        prop::sample::select(vec!["traffic_control_sign", "policy_sign", "stop_sign", "car"]),
        prop::sample::select(vec!["0%", "25%", "50%", "75%", "100%"]),
    )
        .prop_map(|(left, top, width, height, label, occlusion)| {
            Annotation::new(left, top, width, height, label).with_occlusion(occlusion)
        })
}

fn audit_results() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["accepted", "rejected", "fixed"]), 0..8)
}

proptest! {
    /// Area tier is Gold exactly when fewer than half the boxes are flagged
    #[test]
    fn area_gold_iff_under_half_flagged(boxes in prop::collection::vec(annotation(), 1..12)) {
        let (enriched, rating) = rate_task(&task("t", boxes, vec![]), &RatingPolicy::default());
        let fraction = enriched.flagged_count() as f64 / enriched.annotations().len() as f64;
        prop_assert_eq!(rating.area_tier() == Tier::Gold, fraction < 0.5);
    }

    /// A lone box never deviates from itself
    #[test]
    fn single_box_has_zero_deviation(boxed in annotation()) {
        let boxes = vec![boxed];
        let mean = mean_area(&boxes);
        prop_assert_eq!(relative_deviation(boxes[0].area(), mean), 0.0);
        prop_assert!(!flag_area_deviations(&boxes, 0.9)[0].is_flagged());
    }

    /// Running the detector twice changes nothing
    #[test]
    fn detector_is_idempotent(boxes in prop::collection::vec(annotation(), 0..12)) {
        let once = flag_area_deviations(&boxes, 0.9);
        let twice = flag_area_deviations(&once, 0.9);
        prop_assert_eq!(once, twice);
    }

    /// Detection keeps every box, in order, with its geometry untouched
    #[test]
    fn detector_preserves_boxes(boxes in prop::collection::vec(annotation(), 0..12)) {
        let enriched = flag_area_deviations(&boxes, 0.9);
        prop_assert_eq!(enriched.len(), boxes.len());
        for (before, after) in boxes.iter().zip(&enriched) {
            prop_assert_eq!(&before.label, &after.label);
            prop_assert_eq!(before.area(), after.area());
        }
    }

    /// The final score is the mean of four tiers, so it moves in steps of 1/8
    #[test]
    fn final_score_is_an_eighth_step(
        boxes in prop::collection::vec(annotation(), 0..12),
        results in audit_results(),
    ) {
        let (_, rating) = rate_task(&task("t", boxes, audits(&results)), &RatingPolicy::default());
        let expected = rating.scores.ordered().iter().map(|s| s.tier.score()).sum::<f64>() / 4.0;
        prop_assert_eq!(rating.final_score, expected);
        let eighths = rating.final_score * 8.0;
        prop_assert_eq!(eighths, eighths.round());
        prop_assert!((0.0..=1.0).contains(&rating.final_score));
    }

    /// One issue string per dimension below Gold
    #[test]
    fn one_issue_per_degraded_dimension(
        boxes in prop::collection::vec(annotation(), 0..12),
        results in audit_results(),
    ) {
        let (_, rating) = rate_task(&task("t", boxes, audits(&results)), &RatingPolicy::default());
        let degraded = rating.scores.ordered().iter().filter(|s| s.tier.is_degraded()).count();
        prop_assert_eq!(rating.issues.len(), degraded);
    }
}
