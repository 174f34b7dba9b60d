//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manifest Generator - Render a Markdown manifest from a template and a JSON config
#[derive(Parser, Debug)]
#[command(name = "manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file path
    #[arg(short, long, global = true, default_value = "README.md")]
    pub output: PathBuf,

    /// Template file path (defaults to the bundled template)
    #[arg(short, long, global = true)]
    pub template: Option<PathBuf>,

    /// Config file path (JSON) used for templating
    #[arg(short, long, global = true, default_value = "manifest.json")]
    pub config: PathBuf,

    /// Print internal state (arguments, context, match details) to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// The command to run; omitted means generate
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Remove generated artifacts
    Clean,
}
