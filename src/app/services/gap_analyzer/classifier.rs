//! Gap computation and shortage classification
//!
//! Gap is demand minus supply, signed: a negative gap means heuristic
//! oversupply and is a legitimate result. Status is derived from the
//! supply/demand coverage ratio.

use crate::app::models::GapStatus;
use crate::constants::CRITICAL_RATIO_THRESHOLD;

/// Compute the signed gap between estimated demand and observed supply
pub fn compute_gap(supply: u64, demand: u64) -> i64 {
    demand as i64 - supply as i64
}

/// Classify a supply/demand pair into a shortage status
///
/// Supply covering less than half the estimated demand is a critical
/// shortage. A demand of 0 (possible only when rounding a very small product
/// collapses it) is treated as a critical shortage deterministically: supply
/// with no projected absorption is an extreme shortage signal, not an
/// undefined state.
pub fn classify(supply: u64, demand: u64) -> GapStatus {
    if demand == 0 {
        return GapStatus::CriticalShortage;
    }

    let ratio = supply as f64 / demand as f64;
    if ratio < CRITICAL_RATIO_THRESHOLD {
        GapStatus::CriticalShortage
    } else {
        GapStatus::Moderate
    }
}
