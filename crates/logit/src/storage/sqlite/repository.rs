//! SQLite repository implementation.
//!
//! Implements `LogRepository` from `logit_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::Transaction;
use tokio_rusqlite::Connection;

use logit_core::log::{LogEntry, NewLogEntry, LOG_ENTITY};
use logit_core::storage::{LogRepository, Page, RepositoryError, Result};

use super::conversions::row_to_log;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds the process-wide connection handle. The connection lives on a
/// dedicated worker thread, so queries never block the async runtime.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The `logs` table is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, LOG_ENTITY))
    }

    /// Runs `operation` inside a transaction scoped to this call.
    ///
    /// The transaction is opened before `operation` runs and committed only if
    /// it returns `Ok`. On any other exit path the transaction is dropped,
    /// which rolls it back and releases it.
    async fn session<F, R>(&self, name: &'static str, operation: F) -> tokio_rusqlite::Result<R>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tracing::trace!(operation = name, "Storage session opened");
                let value = operation(&tx).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                tracing::trace!(operation = name, "Storage session committed");
                Ok(value)
            })
            .await
    }
}

#[async_trait]
impl LogRepository for SqliteRepository {
    async fn get_log(&self, id: i64) -> Result<Option<LogEntry>> {
        self.session("get_log", move |tx| {
            match tx.query_row(schema::SELECT_LOG_BY_ID, [id], row_to_log) {
                Ok(entry) => Ok(Some(entry)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, LOG_ENTITY, id.to_string()))
    }

    async fn list_logs(&self, page: Page) -> Result<Vec<LogEntry>> {
        // SQLite reads a negative LIMIT as "no limit"
        let limit = page
            .limit
            .map_or(-1, |limit| i64::try_from(limit).unwrap_or(i64::MAX));
        let skip = i64::try_from(page.skip).unwrap_or(i64::MAX);

        self.session("list_logs", move |tx| {
            let mut stmt = tx.prepare(schema::SELECT_LOGS_PAGE)?;
            let rows = stmt.query_map([limit, skip], row_to_log)?;

            let mut logs = Vec::new();
            for row_result in rows {
                logs.push(row_result?);
            }
            Ok(logs)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, LOG_ENTITY))
    }

    async fn create_log(&self, log: &NewLogEntry) -> Result<LogEntry> {
        let new = log.clone();

        self.session("create_log", move |tx| {
            tx.execute(
                schema::INSERT_LOG,
                rusqlite::params![new.section_number, new.contractor_type, new.objective],
            )?;
            Ok(LogEntry::from_new(tx.last_insert_rowid(), new))
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, LOG_ENTITY))
    }

    async fn update_log(&self, id: i64, log: &NewLogEntry) -> Result<LogEntry> {
        let update = log.clone();

        self.session("update_log", move |tx| {
            let rows = tx.execute(
                schema::UPDATE_LOG,
                rusqlite::params![
                    id,
                    update.section_number,
                    update.contractor_type,
                    update.objective
                ],
            )?;
            if rows == 0 {
                return Err(rusqlite::Error::QueryReturnedNoRows);
            }
            Ok(LogEntry::from_new(id, update))
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, LOG_ENTITY, id.to_string()))
    }

    async fn delete_log(&self, id: i64) -> Result<()> {
        self.session("delete_log", move |tx| {
            let rows = tx.execute(schema::DELETE_LOG, [id])?;
            if rows == 0 {
                Err(rusqlite::Error::QueryReturnedNoRows)
            } else {
                Ok(())
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, LOG_ENTITY, id.to_string()))
    }

    async fn count_logs(&self) -> Result<u64> {
        self.session("count_logs", |tx| {
            tx.query_row(schema::COUNT_LOGS, [], |row| row.get::<_, i64>(0))
        })
        .await
        .map(|count| count as u64)
        .map_err(|e| map_tokio_rusqlite_error(e, LOG_ENTITY))
    }
}
