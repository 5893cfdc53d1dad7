//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use logit_core::log::LogEntry;
use rusqlite::Row;

/// Convert a SQLite row to a LogEntry.
///
/// Expected columns: id, section_number, contractor_type, objective
pub fn row_to_log(row: &Row) -> rusqlite::Result<LogEntry> {
    Ok(LogEntry {
        id: row.get(0)?,
        section_number: row.get(1)?,
        contractor_type: row.get(2)?,
        objective: row.get(3)?,
    })
}
