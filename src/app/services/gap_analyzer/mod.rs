//! Gap analysis pipeline for TESDA TVET statistics
//!
//! This module implements the full transform from a raw spreadsheet table to
//! an ordered gap report. It is organized into logical components:
//!
//! - [`layout`] - Per-file positional layout resolution
//! - [`row_filter`] - Candidate row selection and noise filtering
//! - [`demand`] - Sector-weighted labor demand estimation
//! - [`classifier`] - Gap computation and shortage classification
//! - [`analyzer`] - Pipeline orchestration and result assembly
//! - [`stats`] - Per-run statistics
//!
//! # Processing Pipeline
//!
//! The stages run strictly in sequence for each qualifying row:
//!
//! 1. **Layout resolution**: pick start row and label/supply columns from the
//!    file identifier
//! 2. **Row filtering**: drop header rows, blank labels, totals, sub-totals,
//!    notes, sources and zero-supply rows
//! 3. **Demand estimation**: ordered first-match of the label against the
//!    sector weight table, demand = round(supply x weight)
//! 4. **Classification**: gap = demand - supply, status from the coverage
//!    ratio
//!
//! The transform is a pure function of its inputs: no shared state, identical
//! tables always produce identical reports.
//!
//! # Example Usage
//!
//! ```rust
//! use tvet_gap_analyzer::app::services::gap_analyzer::GapAnalyzer;
//! use tvet_gap_analyzer::{Cell, RawTable};
//!
//! # fn example() -> tvet_gap_analyzer::Result<()> {
//! let mut rows = vec![vec![Cell::Empty; 7]; 5]; // header/title rows
//! rows.push(vec![
//!     Cell::Empty,
//!     Cell::from("Construction NC II"),
//!     Cell::Empty,
//!     Cell::Empty,
//!     Cell::Empty,
//!     Cell::Empty,
//!     Cell::Number(100.0),
//! ]);
//! let table = RawTable::new(rows);
//!
//! let analyzer = GapAnalyzer::default();
//! let result = analyzer.analyze(&table, 0)?;
//! println!("{}", result.stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod classifier;
pub mod demand;
pub mod layout;
pub mod row_filter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use analyzer::{AnalysisResult, GapAnalyzer};
pub use stats::AnalysisStats;

// Re-export utility functions that might be useful externally
pub use classifier::{classify, compute_gap};
pub use demand::{estimate_demand, resolve_weight};
pub use layout::resolve_layout;
pub use row_filter::{filter_row, is_noise_label, parse_supply};
