//! Tests for the gap analysis pipeline
//!
//! Unit tests for each pipeline stage plus scenario tests for the assembled
//! analyzer.

pub mod classifier_tests;
pub mod demand_tests;

// Test helper functions and fixtures
use crate::app::models::{Cell, RawTable, SourceLayout};

/// Build a data row with `label` at the layout's name column and `supply` at
/// its supply column, padding the rest with blanks
pub fn data_row(layout: &SourceLayout, label: &str, supply: Cell) -> Vec<Cell> {
    let width = layout.name_col.max(layout.supply_col) + 1;
    let mut row = vec![Cell::Empty; width];
    row[layout.name_col] = Cell::from(label);
    row[layout.supply_col] = supply;
    row
}

/// Build a table with `layout.start_row` blank header rows followed by the
/// given data rows
pub fn table_with_data(layout: &SourceLayout, data_rows: Vec<Vec<Cell>>) -> RawTable {
    let mut rows = vec![vec![Cell::Empty; 8]; layout.start_row];
    rows.extend(data_rows);
    RawTable::new(rows)
}
