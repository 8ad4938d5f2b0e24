//! Data models for TVET gap analysis
//!
//! This module contains the core data structures for representing raw
//! spreadsheet tables, per-file positional layouts, and the gap report
//! records produced by the analyzer.

use crate::constants::{self, layouts};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Raw Table Structures
// =============================================================================

/// A single untyped spreadsheet cell value
///
/// Spreadsheet parsers produce loosely typed cells; the analyzer interprets
/// them positionally according to the resolved [`SourceLayout`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Textual cell content
    Text(String),
    /// Numeric cell content
    Number(f64),
    /// Blank cell
    Empty,
}

impl Cell {
    /// Get the textual content of this cell, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Check whether this cell is blank
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// An ordered table of untyped rows, as flattened from the first worksheet
/// of a source spreadsheet
///
/// Read-only to the analyzer; produced by the spreadsheet adapter or supplied
/// directly by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Create a table from rows of cells
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of rows in the table
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the rows of the table
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

impl From<Vec<Vec<Cell>>> for RawTable {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

// =============================================================================
// Source Layout Structures
// =============================================================================

/// Spreadsheet layout variants across the known TESDA publication files
///
/// Each published file follows one of three positional structures. The kind
/// is derived from the file identifier; unrecognized identifiers fall back
/// to [`LayoutKind::Regional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Breakdown by region (the default structure)
    Regional,
    /// Breakdown by province
    Provincial,
    /// Breakdown by sector
    Sectoral,
}

impl LayoutKind {
    /// Classify a file identifier into its layout kind
    ///
    /// Identifiers 1, 4 and 7 are provincial breakdowns; 2, 5 and 8 are
    /// sectoral breakdowns; everything else (including identifiers outside
    /// the known set) uses the regional structure.
    pub fn for_file_index(file_index: usize) -> Self {
        if constants::PROVINCIAL_FILE_INDICES.contains(&file_index) {
            LayoutKind::Provincial
        } else if constants::SECTORAL_FILE_INDICES.contains(&file_index) {
            LayoutKind::Sectoral
        } else {
            LayoutKind::Regional
        }
    }
}

/// Positional layout of one spreadsheet variant
///
/// Describes where the data section starts and which columns hold the
/// category label and the supply count. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLayout {
    /// First data row; all rows before it are headers/titles and are skipped
    pub start_row: usize,
    /// Column holding the category label
    pub name_col: usize,
    /// Column holding the supply count
    pub supply_col: usize,
    /// Whether this is a provincial breakdown file
    pub provincial: bool,
}

impl SourceLayout {
    /// Layout for a given layout kind
    pub fn for_kind(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Regional => Self {
                start_row: layouts::REGIONAL_START_ROW,
                name_col: layouts::REGIONAL_NAME_COL,
                supply_col: layouts::REGIONAL_SUPPLY_COL,
                provincial: false,
            },
            LayoutKind::Provincial => Self {
                start_row: layouts::PROVINCIAL_START_ROW,
                name_col: layouts::PROVINCIAL_NAME_COL,
                supply_col: layouts::PROVINCIAL_SUPPLY_COL,
                provincial: true,
            },
            LayoutKind::Sectoral => Self {
                start_row: layouts::SECTORAL_START_ROW,
                name_col: layouts::SECTORAL_NAME_COL,
                supply_col: layouts::SECTORAL_SUPPLY_COL,
                provincial: false,
            },
        }
    }
}

// =============================================================================
// Gap Report Structures
// =============================================================================

/// Shortage classification for a category's supply/demand gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GapStatus {
    /// Supply covers less than half of the estimated demand
    #[serde(rename = "Critical Shortage")]
    CriticalShortage,
    /// Supply covers at least half of the estimated demand
    #[serde(rename = "Moderate")]
    Moderate,
}

impl GapStatus {
    /// Human-readable status label, as emitted in reports
    pub fn label(self) -> &'static str {
        match self {
            GapStatus::CriticalShortage => constants::STATUS_CRITICAL_SHORTAGE,
            GapStatus::Moderate => constants::STATUS_MODERATE,
        }
    }
}

impl std::fmt::Display for GapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GapStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            constants::STATUS_CRITICAL_SHORTAGE => Ok(GapStatus::CriticalShortage),
            constants::STATUS_MODERATE => Ok(GapStatus::Moderate),
            other => Err(Error::data_validation(format!(
                "Invalid gap status '{}': must be '{}' or '{}'",
                other,
                constants::STATUS_CRITICAL_SHORTAGE,
                constants::STATUS_MODERATE
            ))),
        }
    }
}

/// One line of the gap report: a qualifying category with its supply count,
/// estimated demand, signed gap and shortage status
///
/// Created once per qualifying row and never mutated afterwards. The gap may
/// be negative when a category's supply exceeds its estimated demand; that is
/// legitimate oversupply, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    /// Category label as it appears in the source file, trimmed
    pub label: String,
    /// Enrolled/graduated/certified count read from the source table
    pub supply: u64,
    /// Estimated labor demand (supply scaled by the sector multiplier)
    pub demand: u64,
    /// Demand minus supply; positive means undersupply
    pub gap: i64,
    /// Shortage classification
    pub status: GapStatus,
}

impl GapRecord {
    /// Create a new gap record with validation
    pub fn new(label: String, supply: u64, demand: u64, status: GapStatus) -> Result<Self> {
        let record = Self {
            label,
            supply,
            demand,
            gap: demand as i64 - supply as i64,
            status,
        };
        record.validate()?;
        Ok(record)
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::data_validation(
                "Gap record label cannot be empty".to_string(),
            ));
        }

        if self.supply == 0 {
            return Err(Error::data_validation(format!(
                "Gap record '{}' has zero supply: zero-supply rows must be filtered upstream",
                self.label
            )));
        }

        if self.gap != self.demand as i64 - self.supply as i64 {
            return Err(Error::data_validation(format!(
                "Gap record '{}' has inconsistent gap {} (demand {} - supply {})",
                self.label, self.gap, self.demand, self.supply
            )));
        }

        Ok(())
    }

    /// Supply as a fraction of estimated demand, if demand is nonzero
    pub fn coverage_ratio(&self) -> Option<f64> {
        if self.demand == 0 {
            None
        } else {
            Some(self.supply as f64 / self.demand as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod cell_tests {
        use super::*;

        #[test]
        fn test_cell_as_text() {
            assert_eq!(Cell::Text("abc".to_string()).as_text(), Some("abc"));
            assert_eq!(Cell::Number(5.0).as_text(), None);
            assert_eq!(Cell::Empty.as_text(), None);
        }

        #[test]
        fn test_cell_blankness() {
            assert!(Cell::Empty.is_blank());
            assert!(Cell::Text("   ".to_string()).is_blank());
            assert!(!Cell::Text("x".to_string()).is_blank());
            assert!(!Cell::Number(0.0).is_blank());
        }

        #[test]
        fn test_cell_from_str_collapses_whitespace_to_empty() {
            assert_eq!(Cell::from("  "), Cell::Empty);
            assert_eq!(Cell::from("abc"), Cell::Text("abc".to_string()));
        }
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_layout_kind_classification() {
            assert_eq!(LayoutKind::for_file_index(0), LayoutKind::Regional);
            assert_eq!(LayoutKind::for_file_index(1), LayoutKind::Provincial);
            assert_eq!(LayoutKind::for_file_index(2), LayoutKind::Sectoral);
            assert_eq!(LayoutKind::for_file_index(3), LayoutKind::Regional);
            assert_eq!(LayoutKind::for_file_index(4), LayoutKind::Provincial);
            assert_eq!(LayoutKind::for_file_index(5), LayoutKind::Sectoral);
            assert_eq!(LayoutKind::for_file_index(6), LayoutKind::Regional);
            assert_eq!(LayoutKind::for_file_index(7), LayoutKind::Provincial);
            assert_eq!(LayoutKind::for_file_index(8), LayoutKind::Sectoral);
        }

        #[test]
        fn test_unknown_index_falls_back_to_regional() {
            assert_eq!(LayoutKind::for_file_index(9), LayoutKind::Regional);
            assert_eq!(LayoutKind::for_file_index(99), LayoutKind::Regional);
        }

        #[test]
        fn test_layout_positions() {
            let regional = SourceLayout::for_kind(LayoutKind::Regional);
            assert_eq!(regional.start_row, 5);
            assert_eq!(regional.name_col, 1);
            assert_eq!(regional.supply_col, 6);
            assert!(!regional.provincial);

            let provincial = SourceLayout::for_kind(LayoutKind::Provincial);
            assert_eq!(provincial.start_row, 9);
            assert_eq!(provincial.name_col, 1);
            assert_eq!(provincial.supply_col, 7);
            assert!(provincial.provincial);

            let sectoral = SourceLayout::for_kind(LayoutKind::Sectoral);
            assert_eq!(sectoral.start_row, 9);
            assert_eq!(sectoral.name_col, 0);
            assert_eq!(sectoral.supply_col, 6);
            assert!(!sectoral.provincial);
        }
    }

    mod gap_record_tests {
        use super::*;

        #[test]
        fn test_record_creation_computes_gap() {
            let record = GapRecord::new(
                "Construction NC II".to_string(),
                100,
                240,
                GapStatus::CriticalShortage,
            )
            .unwrap();
            assert_eq!(record.gap, 140);
            assert!(record.validate().is_ok());
        }

        #[test]
        fn test_record_negative_gap_is_legitimate() {
            let record =
                GapRecord::new("Agri Crops NC I".to_string(), 100, 80, GapStatus::Moderate)
                    .unwrap();
            assert_eq!(record.gap, -20);
            assert!(record.validate().is_ok());
        }

        #[test]
        fn test_record_rejects_empty_label() {
            assert!(GapRecord::new("  ".to_string(), 10, 14, GapStatus::Moderate).is_err());
        }

        #[test]
        fn test_record_rejects_zero_supply() {
            assert!(GapRecord::new("X".to_string(), 0, 0, GapStatus::CriticalShortage).is_err());
        }

        #[test]
        fn test_record_validate_catches_inconsistent_gap() {
            let mut record =
                GapRecord::new("X".to_string(), 50, 75, GapStatus::Moderate).unwrap();
            record.gap = 999;
            assert!(record.validate().is_err());
        }

        #[test]
        fn test_coverage_ratio() {
            let record = GapRecord::new("X".to_string(), 100, 240, GapStatus::CriticalShortage)
                .unwrap();
            let ratio = record.coverage_ratio().unwrap();
            assert!((ratio - 100.0 / 240.0).abs() < 1e-9);

            let degenerate = GapRecord {
                label: "X".to_string(),
                supply: 1,
                demand: 0,
                gap: -1,
                status: GapStatus::CriticalShortage,
            };
            assert_eq!(degenerate.coverage_ratio(), None);
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn test_status_labels() {
            assert_eq!(GapStatus::CriticalShortage.label(), "Critical Shortage");
            assert_eq!(GapStatus::Moderate.label(), "Moderate");
            assert_eq!(format!("{}", GapStatus::CriticalShortage), "Critical Shortage");
        }

        #[test]
        fn test_status_from_str() {
            assert_eq!(
                GapStatus::from_str("Critical Shortage").unwrap(),
                GapStatus::CriticalShortage
            );
            assert_eq!(GapStatus::from_str("Moderate").unwrap(), GapStatus::Moderate);
            assert!(GapStatus::from_str("Severe").is_err());
        }
    }

    #[test]
    fn test_serde_serialization() {
        let record = GapRecord::new(
            "Tourism Services NC I".to_string(),
            50,
            75,
            GapStatus::Moderate,
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"label\":\"Tourism Services NC I\""));
        assert!(json.contains("\"supply\":50"));
        assert!(json.contains("\"demand\":75"));
        assert!(json.contains("\"gap\":25"));
        assert!(json.contains("\"status\":\"Moderate\""));

        let deserialized: GapRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);

        // Critical shortage serializes with the space in the label
        let json = serde_json::to_string(&GapStatus::CriticalShortage).unwrap();
        assert_eq!(json, "\"Critical Shortage\"");
    }
}
