//! Manifest Generator CLI
//!
//! Renders a Markdown manifest (typically a README) from a text template and
//! a JSON config, or cleans the generated output file.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if debug mode is on
    if cli.debug {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!(?cli, "debug mode enabled");
    }

    match cli.command {
        Some(Commands::Clean) => commands::run_clean(&cli.output),
        None => commands::run_generate(&cli.output, cli.template.as_deref(), &cli.config),
    }
}
