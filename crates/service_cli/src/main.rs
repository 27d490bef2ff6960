//! Contab CLI - Command Line Operations for Random Contingency Tables
//!
//! This is the operational entry point for the contab sampling library.
//!
//! # Commands
//!
//! - `contab generate --rows 3,2 --cols 4,1 --count 100` - Draw random
//!   tables with the given margins
//! - `contab check --rows 3,2 --cols 4,1` - Validate margins and report
//!   the table dimensions and grand total
//!
//! # Architecture
//!
//! As the Service layer of the workspace, this crate orchestrates the
//! foundation and sampling layers behind a unified command-line
//! interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Contab Random Contingency Table CLI
#[derive(Parser)]
#[command(name = "contab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "contab.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw random tables satisfying the given margins
    Generate {
        /// Comma-separated row sums, e.g. 3,2
        #[arg(short, long)]
        rows: String,

        /// Comma-separated column sums, e.g. 4,1
        #[arg(long)]
        cols: String,

        /// Number of tables to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Number of worker threads (0 = all logical CPUs)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Seed for the random engine (0 or absent = system entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (csv, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (stdout when absent)
        #[arg(short, long)]
        output: Option<String>,

        /// Use 64-bit table cells instead of 32-bit
        #[arg(long)]
        wide: bool,
    },

    /// Validate margins and report the table shape and grand total
    Check {
        /// Comma-separated row sums, e.g. 3,2
        #[arg(short, long)]
        rows: String,

        /// Comma-separated column sums, e.g. 4,1
        #[arg(long)]
        cols: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let defaults = config::CliDefaults::load(&cli.config)?;

    match cli.command {
        Commands::Generate {
            rows,
            cols,
            count,
            workers,
            seed,
            format,
            output,
            wide,
        } => commands::generate::run(commands::generate::GenerateArgs {
            rows,
            cols,
            count,
            workers: workers.or(defaults.generate.workers),
            seed: seed.or(defaults.generate.seed),
            format: format
                .or(defaults.generate.format)
                .unwrap_or_else(|| "csv".to_string()),
            output,
            wide,
        }),
        Commands::Check { rows, cols } => commands::check::run(&rows, &cols),
    }
}
