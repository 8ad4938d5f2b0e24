//! Spreadsheet input adapter
//!
//! Flattens the first worksheet of an `.xlsx`/`.xls` file, or the full
//! contents of a `.csv` export, into an untyped [`RawTable`]. The analyzer
//! itself never touches the filesystem; this adapter is the only file
//! surface.

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, info};

use crate::app::models::{Cell, RawTable};
use crate::{Error, Result};

/// Load a source file into a raw table, dispatching on the file extension
///
/// Supported extensions: `xlsx`, `xls`, `csv`.
pub fn load_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xls" => load_workbook(path)?,
        "csv" => load_csv(path)?,
        other => {
            return Err(Error::spreadsheet_format(
                path.display().to_string(),
                format!("Unsupported file extension '{}': expected xlsx, xls or csv", other),
            ));
        }
    };

    info!("Loaded {} rows from {}", table.row_count(), path.display());
    Ok(table)
}

/// Flatten the first worksheet of an Excel workbook into rows of cells
fn load_workbook(path: &Path) -> Result<RawTable> {
    let file = path.display().to_string();

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::spreadsheet_format(&file, e.to_string()))?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first().cloned() else {
        return Err(Error::spreadsheet_format(&file, "Workbook has no worksheets"));
    };
    debug!("Reading worksheet '{}' from {}", sheet_name, file);

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::spreadsheet_format(&file, e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(RawTable::new(rows))
}

/// Read a CSV export into rows of cells
///
/// The file is read verbatim: no header handling, no row skipping. Layout
/// interpretation belongs to the analyzer.
fn load_csv(path: &Path) -> Result<RawTable> {
    let file_name = path.display().to_string();

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", file_name), e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            Error::csv_parsing(&file_name, "Malformed CSV record", Some(e))
        })?;
        rows.push(record.iter().map(cell_from_str).collect());
    }

    Ok(RawTable::new(rows))
}

/// Convert a calamine cell into the analyzer's untyped cell
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from(s.as_str()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::Error(e) => Cell::Text(format!("{:?}", e)),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from(s.as_str()),
    }
}

/// Convert a CSV field into the analyzer's untyped cell
///
/// Fields that parse as numbers become numeric cells so that supply columns
/// behave the same whether the source was xlsx or a CSV export.
fn cell_from_str(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Cell::Empty
    } else if let Ok(n) = trimmed.parse::<f64>() {
        Cell::Number(n)
    } else {
        Cell::Text(trimmed.to_string())
    }
}
