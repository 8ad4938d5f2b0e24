//! Command-line argument definitions for the TVET gap analyzer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{constants, Error, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the TVET gap analyzer
///
/// Estimates labor demand gaps from published TESDA TVET statistics
/// spreadsheets by applying fixed sector demand multipliers to supply counts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tvet-gap-analyzer",
    version,
    about = "Estimate labor demand gaps from TESDA TVET statistics spreadsheets",
    long_about = "Reads a published TESDA TVET statistics spreadsheet, extracts qualifying \
                  (category, supply) rows according to the file's positional layout, applies \
                  fixed sector demand multipliers, and emits a gap report with demand, supply, \
                  gap and shortage status per category."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the gap analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze a TESDA statistics spreadsheet and emit a gap report
    Analyze(AnalyzeArgs),
    /// List the known TESDA publication files and their identifiers
    Sources,
}

/// Output serialization formats for the gap report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of gap records
    Json,
    /// CSV with one gap record per row
    Csv,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input spreadsheet (.xlsx, .xls or .csv)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input spreadsheet (.xlsx, .xls or .csv)"
    )]
    pub input_path: PathBuf,

    /// File identifier (0-8) selecting the layout of the input
    ///
    /// If not specified, the identifier is inferred from the input filename
    /// when it matches a known TESDA publication file, and falls back to 0
    /// otherwise.
    #[arg(
        short = 'f',
        long = "file-index",
        value_name = "INDEX",
        help = "File identifier (0-8) selecting the spreadsheet layout"
    )]
    pub file_index: Option<usize>,

    /// Output path for the gap report (stdout if omitted)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the gap report (stdout if omitted)"
    )]
    pub output_path: Option<PathBuf>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "json",
        help = "Output format for the gap report"
    )]
    pub format: OutputFormat,

    /// Fail on file identifiers outside the known set (0-8) instead of
    /// silently using the default layout
    #[arg(long = "strict", help = "Reject unknown file identifiers")]
    pub strict: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate the parsed arguments for consistency
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Analyze(args)) => args.validate(),
            Some(Commands::Sources) | None => Ok(()),
        }
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if self.strict {
            if let Some(file_index) = self.file_index {
                if !constants::is_known_file_index(file_index) {
                    return Err(Error::unknown_source_file(file_index));
                }
            }
        }

        Ok(())
    }

    /// Resolve the file identifier: explicit flag, then filename inference,
    /// then the default identifier 0
    pub fn resolve_file_index(&self) -> usize {
        if let Some(file_index) = self.file_index {
            return file_index;
        }

        self.input_path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(constants::source_file_index)
            .unwrap_or(0)
    }

    /// Tracing log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
