//! Tests for gap computation and shortage classification

use crate::app::models::GapStatus;
use crate::app::services::gap_analyzer::classifier::{classify, compute_gap};

#[test]
fn test_gap_is_signed() {
    assert_eq!(compute_gap(100, 240), 140);
    assert_eq!(compute_gap(100, 80), -20);
    assert_eq!(compute_gap(50, 50), 0);
}

#[test]
fn test_ratio_below_half_is_critical() {
    // 100/240 = 0.4167
    assert_eq!(classify(100, 240), GapStatus::CriticalShortage);
    // 49/100
    assert_eq!(classify(49, 100), GapStatus::CriticalShortage);
}

#[test]
fn test_ratio_at_or_above_half_is_moderate() {
    // Exactly 0.5 is NOT a critical shortage (strict less-than)
    assert_eq!(classify(50, 100), GapStatus::Moderate);
    // 50/75 = 0.667
    assert_eq!(classify(50, 75), GapStatus::Moderate);
    // Oversupply is moderate
    assert_eq!(classify(100, 80), GapStatus::Moderate);
}

#[test]
fn test_zero_demand_is_critical_shortage() {
    // Degenerate rounding case: defined deterministically rather than
    // dividing by zero
    assert_eq!(classify(1, 0), GapStatus::CriticalShortage);
}
