//! Sector-weighted labor demand estimation
//!
//! The category label is matched against the sector weight table by ordered
//! first-match substring scan: the first pattern (in declaration order) that
//! appears in the uppercased label wins. Labels matching no pattern use the
//! default multiplier. First-match, not best-match; the table's declaration
//! order is load-bearing.

use crate::constants::{DEFAULT_DEMAND_WEIGHT, SECTOR_DEMAND_WEIGHTS};
use tracing::debug;

/// Resolve the demand multiplier for a category label
///
/// Returns the matched sector pattern (or `None` for the default multiplier)
/// together with the multiplier itself.
pub fn resolve_weight(label: &str) -> (Option<&'static str>, f64) {
    let upper = label.to_uppercase();
    for &(pattern, weight) in SECTOR_DEMAND_WEIGHTS {
        if upper.contains(pattern) {
            return (Some(pattern), weight);
        }
    }
    (None, DEFAULT_DEMAND_WEIGHT)
}

/// Estimate labor demand for a category
///
/// `demand = round(supply x weight)` with round-half-up semantics; both
/// factors are non-negative, so `f64::round` (half away from zero) is
/// equivalent.
pub fn estimate_demand(label: &str, supply: u64) -> u64 {
    let (matched, weight) = resolve_weight(label);
    let demand = (supply as f64 * weight).round() as u64;
    match matched {
        Some(sector) => debug!(
            "'{}' matched sector {} (x{}): supply {} -> demand {}",
            label, sector, weight, supply, demand
        ),
        None => debug!(
            "'{}' matched no sector, default x{}: supply {} -> demand {}",
            label, weight, supply, demand
        ),
    }
    demand
}
