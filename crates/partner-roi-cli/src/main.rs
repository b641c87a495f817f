mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::projection::{ExportArgs, ProjectArgs};

/// Partner ROI projections
#[derive(Parser)]
#[command(
    name = "proi",
    version,
    about = "24-month partner ROI projections",
    long_about = "Project a partnership's monthly revenue, costs and cumulative cash over \
                  24 months with a linear ramp-up, and report breakeven and ROI. \
                  Inputs come from a JSON file, stdin, a named preset, or flags."
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
    /// Run a 24-month projection
    Project(ProjectArgs),
    /// Write the monthly series to a CSV file
    Export(ExportArgs),
    /// List the preset partnership models
    Presets,
    /// Compare the summaries of every preset side by side
    Compare,
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

/// Log to stderr so stdout stays machine-readable. Filter from `PROI_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("PROI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::Export(args) => commands::projection::run_export(args),
        Commands::Presets => commands::presets::run_presets(),
        Commands::Compare => commands::presets::run_compare(),
        Commands::Version => {
            println!("proi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
