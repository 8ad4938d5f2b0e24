//! Command implementations for the TVET gap analyzer CLI
//!
//! This module contains the command execution logic: loading the input table,
//! running the analysis pipeline, serializing the gap report, and summary
//! reporting.

use std::fs::File;
use std::io::Write;
use std::time::Instant;

use colored::Colorize;
use tracing::{debug, info};

use crate::app::adapters::spreadsheet;
use crate::app::models::GapRecord;
use crate::app::services::gap_analyzer::{AnalysisResult, GapAnalyzer};
use crate::cli::args::{AnalyzeArgs, Args, Commands, OutputFormat};
use crate::config::AnalysisConfig;
use crate::{constants, Error, Result};

/// Main command runner for the gap analyzer
pub fn run(args: Args) -> Result<()> {
    args.validate()?;

    match args.command {
        Some(Commands::Analyze(analyze_args)) => run_analyze(analyze_args),
        Some(Commands::Sources) => {
            run_sources();
            Ok(())
        }
        None => Ok(()),
    }
}

/// Execute the analyze command end to end
fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting gap analysis");
    debug!("Command line arguments: {:?}", args);

    let file_index = args.resolve_file_index();
    info!(
        "Analyzing {} as file identifier {}",
        args.input_path.display(),
        file_index
    );

    let table = spreadsheet::load_table(&args.input_path)?;

    let config = AnalysisConfig {
        strict_source_index: args.strict,
    };
    let result = GapAnalyzer::new(config).analyze(&table, file_index)?;

    write_report(&args, &result.records)?;

    if !args.quiet {
        print_summary(&result, start_time.elapsed());
    }

    Ok(())
}

/// Print the known TESDA publication files and their identifiers
fn run_sources() {
    println!("{}", "Known TESDA publication files:".bold());
    for (index, filename) in constants::TESDA_SOURCE_FILES.iter().enumerate() {
        println!("  {:>2}  {}", index, filename);
    }
}

/// Serialize the gap report to the requested destination and format
fn write_report(args: &AnalyzeArgs, records: &[GapRecord]) -> Result<()> {
    let output = match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records).map_err(|e| {
                Error::configuration(format!("Failed to serialize gap report: {}", e))
            })?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in records {
                writer.serialize(record)?;
            }
            let bytes = writer.into_inner().map_err(|e| {
                Error::configuration(format!("Failed to serialize gap report: {}", e))
            })?;
            String::from_utf8(bytes).map_err(|e| {
                Error::configuration(format!("Gap report is not valid UTF-8: {}", e))
            })?
        }
    };

    match &args.output_path {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
            file.write_all(output.as_bytes())
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
            info!("Wrote {} gap records to {}", records.len(), path.display());
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

/// Print a human-readable run summary to stderr
fn print_summary(result: &AnalysisResult, elapsed: std::time::Duration) {
    let critical = result
        .records
        .iter()
        .filter(|r| r.status == crate::GapStatus::CriticalShortage)
        .count();
    let moderate = result.records.len() - critical;

    eprintln!();
    eprintln!("{}", "Gap analysis complete".green().bold());
    eprintln!("  {}", result.stats.summary());
    eprintln!(
        "  {} critical shortage, {} moderate",
        critical.to_string().red().bold(),
        moderate.to_string().yellow()
    );
    eprintln!("  Finished in {:.2?}", elapsed);
}

/// Set up tracing output according to the verbosity flags
fn setup_logging(args: &AnalyzeArgs) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tvet_gap_analyzer={}", args.log_level())));

    // Logs go to stderr so the report itself can be piped from stdout
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
