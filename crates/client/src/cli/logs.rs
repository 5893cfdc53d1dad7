//! Log entry CLI commands.

use clap::{Args, Parser, Subcommand};
use logit_core::log::NewLogEntry;

/// Log entry management commands.
#[derive(Debug, Parser)]
pub struct LogsCommand {
    #[command(subcommand)]
    pub action: LogsAction,
}

/// Business fields of a log entry, shared by create and update.
#[derive(Debug, Args)]
pub struct LogFields {
    /// Section number.
    #[arg(long)]
    pub section_number: i64,
    /// Contractor type (e.g. EL, PL).
    #[arg(long)]
    pub contractor_type: String,
    /// Objective of the logged work.
    #[arg(long)]
    pub objective: String,
}

impl From<LogFields> for NewLogEntry {
    fn from(fields: LogFields) -> Self {
        NewLogEntry::new(fields.section_number, fields.contractor_type, fields.objective)
    }
}

/// Available log actions.
#[derive(Debug, Subcommand)]
pub enum LogsAction {
    /// List log entries.
    List {
        /// Number of entries to skip.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        skip: i64,
        /// Maximum number of entries to return (negative for no limit).
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Create a new log entry.
    Create(LogFields),
    /// Get log entry by ID.
    Get {
        /// Log entry ID.
        id: i64,
    },
    /// Overwrite a log entry by ID.
    Update {
        /// Log entry ID.
        id: i64,
        #[command(flatten)]
        fields: LogFields,
    },
    /// Delete log entry by ID.
    Delete {
        /// Log entry ID.
        id: i64,
    },
}
