//! Application constants for the TVET gap analyzer
//!
//! This module contains the sector demand weight table, the known TESDA
//! publication files, layout positions, and classification thresholds used
//! throughout the analyzer.

// =============================================================================
// Sector Demand Weights
// =============================================================================

/// Industry demand multipliers based on DOLE 2024 labor market trends.
///
/// Scanned in declaration order against the uppercased category label; the
/// FIRST pattern that appears as a substring of the label wins. Order is
/// semantically significant and must not be rearranged.
pub const SECTOR_DEMAND_WEIGHTS: &[(&str, f64)] = &[
    ("CONSTRUCTION", 2.4), // Massive infra demand (Build Better More)
    ("ICT", 2.8),          // Tech talent shortage
    ("HEALTH", 1.9),
    ("TOURISM", 1.5),
    ("AGRICULTURE", 1.2),
    ("LOGISTICS", 2.1),
];

/// Multiplier applied when no sector pattern matches the label
pub const DEFAULT_DEMAND_WEIGHT: f64 = 1.4;

// =============================================================================
// Known TESDA Publication Files
// =============================================================================

/// The nine known TESDA 2024 TVET statistics publication files.
///
/// A file identifier is an index into this list. Indices 1, 4, 7 are
/// provincial breakdowns; indices 2, 5, 8 are sectoral breakdowns; the rest
/// are regional breakdowns.
pub const TESDA_SOURCE_FILES: &[&str] = &[
    /* 0 */ "1_TESDA_2024 Enrolled and Graduates by Region and Sex.xlsx",
    /* 1 */ "2_TESDA_2024 Enrolled and Graduates by Province and Sex.xlsx",
    /* 2 */ "3_TESDA_2024 Enrolled and Graduates by Sector and Sex.xlsx",
    /* 3 */ "4_TESDA_2024 Assessed and Certified by Region and Sex.xlsx",
    /* 4 */ "5_TESDA_2024 Assessed and Certified by Province and Sex.xlsx",
    /* 5 */ "6_TESDA_2024 Assessed and Certified by Sector and Sex.xlsx",
    /* 6 */ "7_TESDA_2024 Number of Registered Programs and TVET Provider by Region.xlsx",
    /* 7 */ "8_TESDA_2024 Number of Registered Programs and TVET Provider by Province.xlsx",
    /* 8 */ "9_TESDA_2024 Number of Registered Programs and TVET Provider by Sector.xlsx",
];

/// File identifiers that use the provincial breakdown layout
pub const PROVINCIAL_FILE_INDICES: &[usize] = &[1, 4, 7];

/// File identifiers that use the sectoral breakdown layout
pub const SECTORAL_FILE_INDICES: &[usize] = &[2, 5, 8];

// =============================================================================
// Spreadsheet Layout Positions
// =============================================================================

/// Positional layout values per spreadsheet variant, determined from the
/// structures of the published TESDA files
pub mod layouts {
    /// Regional files (and the fallback for unrecognized identifiers)
    pub const REGIONAL_START_ROW: usize = 5;
    pub const REGIONAL_NAME_COL: usize = 1;
    pub const REGIONAL_SUPPLY_COL: usize = 6;

    /// Provincial breakdown files
    pub const PROVINCIAL_START_ROW: usize = 9;
    pub const PROVINCIAL_NAME_COL: usize = 1;
    pub const PROVINCIAL_SUPPLY_COL: usize = 7;

    /// Sectoral breakdown files
    pub const SECTORAL_START_ROW: usize = 9;
    pub const SECTORAL_NAME_COL: usize = 0;
    pub const SECTORAL_SUPPLY_COL: usize = 6;
}

// =============================================================================
// Row Filtering
// =============================================================================

/// Label fragments (uppercase) that mark a row as noise rather than a
/// category: totals, sub-totals, footnotes, source attributions, pagination
/// artifacts, and export markers
pub const NOISE_LABEL_PATTERNS: &[&str] =
    &["TOTAL", "SOURCE", "NOTE", "SUB-TOTAL", "PAGE", "OUTPUT"];

// =============================================================================
// Gap Classification
// =============================================================================

/// Supply/demand ratio below which a category is a critical shortage
pub const CRITICAL_RATIO_THRESHOLD: f64 = 0.5;

/// Status label for categories whose supply covers less than half the
/// estimated demand
pub const STATUS_CRITICAL_SHORTAGE: &str = "Critical Shortage";

/// Status label for all other categories
pub const STATUS_MODERATE: &str = "Moderate";

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up the file identifier for a known TESDA publication filename
pub fn source_file_index(filename: &str) -> Option<usize> {
    TESDA_SOURCE_FILES.iter().position(|f| *f == filename)
}

/// Check whether a file identifier is within the known publication set
pub fn is_known_file_index(file_index: usize) -> bool {
    file_index < TESDA_SOURCE_FILES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_table_declaration_order() {
        // First-match semantics depend on this exact order
        let keys: Vec<&str> = SECTOR_DEMAND_WEIGHTS.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "CONSTRUCTION",
                "ICT",
                "HEALTH",
                "TOURISM",
                "AGRICULTURE",
                "LOGISTICS"
            ]
        );
    }

    #[test]
    fn test_weight_table_values() {
        assert_eq!(SECTOR_DEMAND_WEIGHTS[0], ("CONSTRUCTION", 2.4));
        assert_eq!(SECTOR_DEMAND_WEIGHTS[1], ("ICT", 2.8));
        assert_eq!(SECTOR_DEMAND_WEIGHTS[5], ("LOGISTICS", 2.1));
        assert_eq!(DEFAULT_DEMAND_WEIGHT, 1.4);
    }

    #[test]
    fn test_weights_are_positive() {
        for (key, weight) in SECTOR_DEMAND_WEIGHTS {
            assert!(*weight > 0.0, "weight for {} must be positive", key);
        }
        assert!(DEFAULT_DEMAND_WEIGHT > 0.0);
    }

    #[test]
    fn test_source_file_index_lookup() {
        assert_eq!(
            source_file_index("1_TESDA_2024 Enrolled and Graduates by Region and Sex.xlsx"),
            Some(0)
        );
        assert_eq!(
            source_file_index("9_TESDA_2024 Number of Registered Programs and TVET Provider by Sector.xlsx"),
            Some(8)
        );
        assert_eq!(source_file_index("unknown.xlsx"), None);
    }

    #[test]
    fn test_known_file_index_bounds() {
        assert!(is_known_file_index(0));
        assert!(is_known_file_index(8));
        assert!(!is_known_file_index(9));
        assert!(!is_known_file_index(99));
    }

    #[test]
    fn test_layout_index_sets_are_disjoint() {
        for idx in PROVINCIAL_FILE_INDICES {
            assert!(!SECTORAL_FILE_INDICES.contains(idx));
            assert!(is_known_file_index(*idx));
        }
        for idx in SECTORAL_FILE_INDICES {
            assert!(is_known_file_index(*idx));
        }
    }
}
