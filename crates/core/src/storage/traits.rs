use async_trait::async_trait;

use crate::log::{LogEntry, NewLogEntry};

use super::{Page, Result};

/// Repository for log entry operations.
///
/// Implementations run every call in its own storage session: acquired before
/// the operation and released on every exit path.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Gets a log entry by its ID.
    async fn get_log(&self, id: i64) -> Result<Option<LogEntry>>;

    /// Lists log entries in insertion order, windowed by `page`.
    async fn list_logs(&self, page: Page) -> Result<Vec<LogEntry>>;

    /// Inserts a new entry and returns it with its assigned ID.
    async fn create_log(&self, log: &NewLogEntry) -> Result<LogEntry>;

    /// Overwrites the business fields of an existing entry.
    ///
    /// Returns `RepositoryError::NotFound` when no entry has this ID.
    async fn update_log(&self, id: i64, log: &NewLogEntry) -> Result<LogEntry>;

    /// Deletes an entry by its ID.
    ///
    /// Returns `RepositoryError::NotFound` when no entry has this ID.
    async fn delete_log(&self, id: i64) -> Result<()>;

    /// Counts stored entries.
    async fn count_logs(&self) -> Result<u64>;
}
