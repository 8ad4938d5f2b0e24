//! TVET Gap Analyzer Library
//!
//! A Rust library for estimating labor demand gaps from published TESDA TVET
//! statistics spreadsheets.
//!
//! This library provides tools for:
//! - Resolving the positional layout (start row, label/supply columns) of each
//!   known TESDA publication file
//! - Filtering noise rows (totals, sub-totals, notes, sources, blank lines)
//! - Estimating labor demand from supply counts via fixed sector multipliers
//! - Classifying supply/demand gaps into shortage status labels
//! - Reading `.xlsx`/`.xls`/`.csv` source files into an untyped row table

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod gap_analyzer;
    }
    pub mod adapters {
        pub mod spreadsheet;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Cell, GapRecord, GapStatus, LayoutKind, RawTable, SourceLayout};
pub use app::services::gap_analyzer::{AnalysisResult, GapAnalyzer};
pub use config::AnalysisConfig;

/// Result type alias for gap analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gap analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The supplied table is absent, empty, or structurally unusable
    #[error("Unreadable table: {message}")]
    UnreadableTable { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Spreadsheet (xlsx/xls) format error
    #[error("Spreadsheet format error in file '{file}': {message}")]
    SpreadsheetFormat { file: String, message: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// File identifier outside the known TESDA publication set (strict mode only)
    #[error("Unknown source file index: {file_index} (known indices are 0-8)")]
    UnknownSourceFile { file_index: usize },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an unreadable-table error
    pub fn unreadable_table(message: impl Into<String>) -> Self {
        Self::UnreadableTable {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a spreadsheet format error
    pub fn spreadsheet_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SpreadsheetFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an unknown source file error
    pub fn unknown_source_file(file_index: usize) -> Self {
        Self::UnknownSourceFile { file_index }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
