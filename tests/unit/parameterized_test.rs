//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same scoring rule with different inputs.

use labelgrade::core::models::{GradeThresholds, RatingPolicy, Tier, TierThresholds};
use labelgrade::core::services::rate_task;
use test_case::test_case;

use crate::common::{occluded, task};

// =============================================================================
// Tier cutoffs
// =============================================================================

#[test_case(0.0, Tier::Gold ; "no issues")]
#[test_case(49.999, Tier::Gold ; "just below silver")]
#[test_case(50.0, Tier::Silver ; "silver is inclusive")]
#[test_case(79.999, Tier::Silver ; "just below bronze")]
#[test_case(80.0, Tier::Bronze ; "bronze is inclusive")]
#[test_case(100.0, Tier::Bronze ; "all issues")]
fn test_tier_for_issue_percentage(pct: f64, expected: Tier) {
    assert_eq!(TierThresholds::default().tier_for(pct), expected);
}

#[test_case(1.0, Tier::Gold ; "perfect")]
#[test_case(0.9, Tier::Gold ; "gold is inclusive")]
#[test_case(0.875, Tier::Silver ; "one silver dimension")]
#[test_case(0.8, Tier::Silver ; "silver is inclusive")]
#[test_case(0.79999, Tier::Bronze ; "just below silver")]
#[test_case(0.0, Tier::Bronze ; "all bronze")]
fn test_grade_for_final_score(score: f64, expected: Tier) {
    assert_eq!(GradeThresholds::default().grade_for(score), expected);
}

// =============================================================================
// Occlusion categories
// =============================================================================

#[test_case("0%", Tier::Gold ; "none")]
#[test_case("25%", Tier::Gold ; "quarter is not an issue")]
#[test_case("50%", Tier::Bronze ; "half")]
#[test_case("75%", Tier::Bronze ; "three quarters")]
#[test_case("100%", Tier::Bronze ; "full")]
#[test_case("50", Tier::Gold ; "unknown spelling is not an issue")]
fn test_uniform_occlusion(occlusion: &str, expected: Tier) {
    let t = task("t", vec![occluded(occlusion), occluded(occlusion)], vec![]);
    let (_, rating) = rate_task(&t, &RatingPolicy::default());
    assert_eq!(rating.occlusion_tier(), expected);
}

// =============================================================================
// Tier display
// =============================================================================

#[test_case(Tier::Gold, "1", "Gold")]
#[test_case(Tier::Silver, "0.5", "Silver")]
#[test_case(Tier::Bronze, "0", "Bronze")]
fn test_tier_labels(tier: Tier, score: &str, name: &str) {
    assert_eq!(tier.score_label(), score);
    assert_eq!(tier.to_string(), name);
}
