//! Candidate row selection and noise filtering
//!
//! Rows before the layout's start row are always headers/titles and are
//! skipped unconditionally. Candidate rows are then accuracy-filtered: blank
//! labels, totals, sub-totals, notes, sources, pagination artifacts and
//! zero-supply rows are dropped silently. A dropped row is filtering, not a
//! fault.

use crate::app::models::{Cell, SourceLayout};
use crate::constants::NOISE_LABEL_PATTERNS;
use tracing::debug;

/// A row that survived filtering: its trimmed category label and supply count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRow {
    pub label: String,
    pub supply: u64,
}

/// Check whether a label marks a noise row (total, source, note, sub-total,
/// page or output marker), case-insensitively, anywhere in the label
pub fn is_noise_label(label: &str) -> bool {
    let upper = label.to_uppercase();
    NOISE_LABEL_PATTERNS
        .iter()
        .any(|pattern| upper.contains(pattern))
}

/// Parse a supply count from a cell with fallback to 0
///
/// Numeric cells are truncated toward zero; textual cells are parsed as a
/// whole integer, then as a whole real number truncated toward zero. Blank,
/// missing, malformed and negative values all coerce to 0, which rejects the
/// row downstream.
pub fn parse_supply(cell: Option<&Cell>) -> u64 {
    match cell {
        Some(Cell::Number(n)) => {
            if n.is_finite() && *n >= 0.0 {
                n.trunc() as u64
            } else {
                0
            }
        }
        Some(Cell::Text(s)) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<u64>() {
                n
            } else if let Ok(f) = trimmed.parse::<f64>() {
                if f.is_finite() && f >= 0.0 {
                    f.trunc() as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Some(Cell::Empty) | None => 0,
    }
}

/// Extract the trimmed label from a row's name column, if present and
/// non-empty
fn extract_label(row: &[Cell], name_col: usize) -> Option<String> {
    let label = match row.get(name_col)? {
        Cell::Text(s) => s.trim().to_string(),
        // Some source rows carry numeric region/province codes in the name
        // column; render them the way a spreadsheet displays them
        Cell::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Cell::Empty => return None,
    };

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Apply the accuracy filter to a single candidate row
///
/// Returns the label and supply when the row qualifies, or `None` when it is
/// dropped (blank label, noise label, or zero supply).
pub fn filter_row(row: &[Cell], layout: &SourceLayout) -> Option<FilteredRow> {
    let label = extract_label(row, layout.name_col)?;

    if is_noise_label(&label) {
        debug!("Dropping noise row: '{}'", label);
        return None;
    }

    let supply = parse_supply(row.get(layout.supply_col));
    if supply == 0 {
        debug!("Dropping zero-supply row: '{}'", label);
        return None;
    }

    Some(FilteredRow { label, supply })
}
