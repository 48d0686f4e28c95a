//! LX CLI - course content tools.
//!
//! Provides commands for:
//! - `render`: Render rich-text delta content to HTML or plain text
//! - `quiz`: Score a quiz attempt and print the review

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{QuizArgs, RenderArgs};
use output::Output;

/// LX - course content tools.
#[derive(Parser)]
#[command(name = "lx", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render delta content to HTML or plain text.
    Render(RenderArgs),
    /// Score a quiz attempt.
    Quiz(QuizArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Quiz(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    // Logs go to stderr; stdout carries rendered output
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Quiz(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
