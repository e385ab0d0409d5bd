//! Navigation data toolkit CLI.
//!
//! Provides commands for working with generated navigation data files:
//! - `validate`: parse and validate a file
//! - `convert`: re-encode between the JS and JSON forms
//! - `show`: print the tree as an indented outline

mod commands;
mod config;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, ShowArgs, ValidateArgs};
use output::Output;

/// Navigation data toolkit.
#[derive(Parser)]
#[command(name = "navtree", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a navigation data file.
    Validate(ValidateArgs),
    /// Convert a navigation data file between encodings.
    Convert(ConvertArgs),
    /// Print a navigation data file as an outline.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Convert(args) => args.execute(),
        Commands::Show(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
