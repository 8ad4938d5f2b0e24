//! Tests for sector-weighted demand estimation

use crate::app::services::gap_analyzer::demand::{estimate_demand, resolve_weight};

#[test]
fn test_sector_patterns_match_as_substrings() {
    assert_eq!(resolve_weight("Construction NC II"), (Some("CONSTRUCTION"), 2.4));
    assert_eq!(resolve_weight("ICT Services"), (Some("ICT"), 2.8));
    assert_eq!(resolve_weight("Health Care Services NC II"), (Some("HEALTH"), 1.9));
    assert_eq!(resolve_weight("Tourism Services NC I"), (Some("TOURISM"), 1.5));
    assert_eq!(resolve_weight("Agriculture and Fishery"), (Some("AGRICULTURE"), 1.2));
    assert_eq!(resolve_weight("Logistics NC III"), (Some("LOGISTICS"), 2.1));
}

#[test]
fn test_match_is_case_insensitive() {
    assert_eq!(resolve_weight("construction nc ii"), (Some("CONSTRUCTION"), 2.4));
    assert_eq!(resolve_weight("TOURISM"), (Some("TOURISM"), 1.5));
}

#[test]
fn test_unmatched_label_uses_default_weight() {
    assert_eq!(resolve_weight("Automotive Servicing NC I"), (None, 1.4));
    assert_eq!(resolve_weight("Welding NC II"), (None, 1.4));
}

#[test]
fn test_first_match_wins_over_later_patterns() {
    // Contains both CONSTRUCTION and LOGISTICS; declaration order puts
    // CONSTRUCTION first
    assert_eq!(
        resolve_weight("Construction Logistics NC II"),
        (Some("CONSTRUCTION"), 2.4)
    );
    // Contains both HEALTH and TOURISM; HEALTH is declared first
    assert_eq!(
        resolve_weight("Health and Tourism Services"),
        (Some("HEALTH"), 1.9)
    );
}

#[test]
fn test_demand_is_rounded_product() {
    // 100 x 2.4 = 240
    assert_eq!(estimate_demand("Construction NC II", 100), 240);
    // 50 x 1.5 = 75
    assert_eq!(estimate_demand("Tourism Services NC I", 50), 75);
    // 7 x 1.9 = 13.3 -> 13
    assert_eq!(estimate_demand("Health Care Services", 7), 13);
    // 5 x 1.9 = 9.5 -> rounds half up to 10
    assert_eq!(estimate_demand("Health Care Services", 5), 10);
    // 3 x 1.4 = 4.2 -> 4 (default weight)
    assert_eq!(estimate_demand("Welding NC II", 3), 4);
}

#[test]
fn test_demand_positive_for_positive_supply() {
    // Smallest supply and smallest weight still round to at least 1
    assert_eq!(estimate_demand("Agriculture Crops NC I", 1), 1);
}
