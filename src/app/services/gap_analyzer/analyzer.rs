//! Pipeline orchestration and result assembly
//!
//! Runs the layout/filter/demand/classify stages in sequence over a raw table
//! and collects the gap records in original row order. No sorting, no
//! deduplication: a label that legitimately appears in two rows yields two
//! records.

use tracing::{debug, info};

use super::stats::AnalysisStats;
use super::{classifier, demand, layout, row_filter};
use crate::app::models::{GapRecord, LayoutKind, RawTable};
use crate::config::AnalysisConfig;
use crate::{constants, Error, Result};

/// Result of one analysis run: the ordered gap report plus run statistics
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Gap records in original row order
    pub records: Vec<GapRecord>,
    /// Run statistics
    pub stats: AnalysisStats,
}

impl AnalysisResult {
    /// Number of gap records in the report
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Gap analyzer for TESDA TVET statistics tables
///
/// Stateless across invocations; the same table and file identifier always
/// produce the same report.
#[derive(Debug, Clone, Default)]
pub struct GapAnalyzer {
    config: AnalysisConfig,
}

impl GapAnalyzer {
    /// Create an analyzer with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run the gap analysis over a raw table
    ///
    /// The only error raised for table content is
    /// [`Error::UnreadableTable`], when the table is empty or has fewer rows
    /// than the layout's start row. Individual rows failing validation are
    /// dropped, never escalated. In strict mode an unrecognized file
    /// identifier fails with [`Error::UnknownSourceFile`] instead of
    /// defaulting to the regional layout.
    pub fn analyze(&self, table: &RawTable, file_index: usize) -> Result<AnalysisResult> {
        if self.config.strict_source_index && !constants::is_known_file_index(file_index) {
            return Err(Error::unknown_source_file(file_index));
        }

        let layout = layout::resolve_layout(file_index);

        if table.is_empty() {
            return Err(Error::unreadable_table(
                "Spreadsheet contains no rows".to_string(),
            ));
        }

        if table.row_count() < layout.start_row {
            return Err(Error::unreadable_table(format!(
                "Spreadsheet has {} rows but the data section starts at row {}",
                table.row_count(),
                layout.start_row
            )));
        }

        let mut stats = AnalysisStats {
            header_rows_skipped: layout.start_row,
            layout_kind: Some(LayoutKind::for_file_index(file_index)),
            ..AnalysisStats::default()
        };
        let mut records = Vec::new();

        // Rows before start_row are headers/titles, skipped regardless of
        // content
        for row in &table.rows()[layout.start_row..] {
            stats.rows_scanned += 1;

            let Some(filtered) = row_filter::filter_row(row, &layout) else {
                stats.rows_filtered += 1;
                continue;
            };

            let estimated = demand::estimate_demand(&filtered.label, filtered.supply);
            let status = classifier::classify(filtered.supply, estimated);

            debug!(
                "'{}': supply {}, demand {}, gap {}, {}",
                filtered.label,
                filtered.supply,
                estimated,
                classifier::compute_gap(filtered.supply, estimated),
                status
            );

            records.push(GapRecord::new(
                filtered.label,
                filtered.supply,
                estimated,
                status,
            )?);
            stats.records_emitted += 1;
        }

        info!("Gap analysis complete: {}", stats.summary());

        Ok(AnalysisResult { records, stats })
    }
}
