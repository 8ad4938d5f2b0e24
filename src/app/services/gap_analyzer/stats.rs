//! Per-run analysis statistics

use crate::app::models::LayoutKind;

/// Statistics for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Candidate rows scanned (rows at or after the layout's start row)
    pub rows_scanned: usize,
    /// Header/title rows skipped unconditionally before the start row
    pub header_rows_skipped: usize,
    /// Candidate rows dropped by the accuracy filter
    pub rows_filtered: usize,
    /// Gap records emitted
    pub records_emitted: usize,
    /// Layout kind used for the run
    pub layout_kind: Option<LayoutKind>,
}

impl AnalysisStats {
    /// One-line human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} candidate rows scanned ({} header rows skipped): {} filtered out, {} gap records emitted",
            self.rows_scanned, self.header_rows_skipped, self.rows_filtered, self.records_emitted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_formats_counts() {
        let stats = AnalysisStats {
            rows_scanned: 10,
            header_rows_skipped: 5,
            rows_filtered: 4,
            records_emitted: 6,
            layout_kind: Some(LayoutKind::Regional),
        };
        let summary = stats.summary();
        assert!(summary.contains("10 candidate rows"));
        assert!(summary.contains("4 filtered out"));
        assert!(summary.contains("6 gap records"));
    }
}
