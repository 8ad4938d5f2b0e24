use clap::Parser;
use std::process;
use tvet_gap_analyzer::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("TVET Gap Analyzer - TESDA Labor Demand Gap Estimator");
    println!("====================================================");
    println!();
    println!("Estimate labor demand gaps from published TESDA TVET statistics");
    println!("spreadsheets using fixed sector demand multipliers.");
    println!();
    println!("USAGE:");
    println!("    tvet-gap-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze a statistics spreadsheet and emit a gap report");
    println!("    sources     List the known TESDA publication files and their identifiers");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a regional enrollment file, report to stdout as JSON");
    println!("    tvet-gap-analyzer analyze -i \"1_TESDA_2024 Enrolled and Graduates by Region and Sex.xlsx\"");
    println!();
    println!("    # Analyze a sectoral file explicitly, write CSV to a file");
    println!("    tvet-gap-analyzer analyze -i stats.xlsx --file-index 2 --format csv -o gaps.csv");
    println!();
    println!("For more help on a specific command, use:");
    println!("    tvet-gap-analyzer <COMMAND> --help");
}
