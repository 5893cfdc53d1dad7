//! CLI command definitions.

pub mod health;
pub mod logs;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the LogIt API.
#[derive(Debug, Parser)]
#[command(name = "logit-client")]
#[command(about = "CLI client for the LogIt API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "LOGIT_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the server's welcome message.
    Welcome,
    /// Log entry management.
    Logs(logs::LogsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
