//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Seedbed - loads SQL test fixtures into embedded database backends
#[derive(Parser, Debug)]
#[command(name = "seedbed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database path
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new Seedbed project
    Init(InitArgs),

    /// Load fixture sets into the database
    Load(LoadArgs),

    /// Verify loaded fixture data against the fixture literals
    Verify(VerifyArgs),

    /// List built-in fixture sets
    Ls(LsArgs),

    /// Drop fixture tables from the database
    Clean(CleanArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,

    /// Database type for the generated config (duckdb or sqlite)
    #[arg(short = 't', long, default_value = "duckdb")]
    pub database_type: String,

    /// Database path for the generated config
    #[arg(long, default_value = "seedbed.db")]
    pub database_path: String,
}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Fixture sets to load (comma-separated, default: config's fixtures)
    #[arg(short, long)]
    pub sets: Option<String>,

    /// Drop fixture tables before loading
    #[arg(long)]
    pub refresh: bool,

    /// Write a JSON load report to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Fixture sets to verify (comma-separated, default: config's fixtures)
    #[arg(short, long)]
    pub sets: Option<String>,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: LsOutput,
}

/// Ls output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Human-readable listing
    Text,
    /// JSON listing
    Json,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Fixture sets to clean (comma-separated, default: config's fixtures)
    #[arg(short, long)]
    pub sets: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
