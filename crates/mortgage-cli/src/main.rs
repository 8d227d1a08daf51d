mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::CalculateArgs;
use commands::schedule::{ExportArgs, ScheduleArgs};

/// French amortization mortgage calculator
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "French amortization mortgage calculator",
    long_about = "Computes the constant monthly installment of fixed- and variable-rate \
                  mortgages and their month-by-month amortization schedule with decimal \
                  precision. Requests come from flags, a JSON file (--input) or stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the constant monthly payment
    Calculate(CalculateArgs),
    /// Calculate the monthly payment, echoing index rate and spread
    CalculateSpread(CalculateArgs),
    /// Build the month-by-month amortization schedule
    AmortizationSchedule(ScheduleArgs),
    /// Export the amortization schedule as CSV
    Export(ExportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::mortgage::run_calculate(args),
        Commands::CalculateSpread(args) => commands::mortgage::run_calculate_spread(args),
        Commands::AmortizationSchedule(args) => commands::schedule::run_schedule(args),
        Commands::Export(args) => match commands::schedule::run_export(args) {
            Ok(()) => process::exit(0),
            Err(e) => fail(e),
        },
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => fail(e),
    }
}

fn fail(e: Box<dyn std::error::Error>) -> ! {
    eprintln!("{}: {}", "error".red().bold(), e);
    process::exit(1);
}
