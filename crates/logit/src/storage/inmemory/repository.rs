//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use logit_core::log::{LogEntry, NewLogEntry, LOG_ENTITY};
use logit_core::storage::{LogRepository, Page, RepositoryError, Result};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, LogEntry>,
    next_id: i64,
}

/// In-memory storage backend.
///
/// Ids start at 1 and are never reused, so iterating the map in key order
/// yields entries in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: LOG_ENTITY,
        id: id.to_string(),
    }
}

#[async_trait]
impl LogRepository for InMemoryRepository {
    async fn get_log(&self, id: i64) -> Result<Option<LogEntry>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list_logs(&self, page: Page) -> Result<Vec<LogEntry>> {
        let table = self.table.read().await;
        Ok(page.apply(table.rows.values()).cloned().collect())
    }

    async fn create_log(&self, log: &NewLogEntry) -> Result<LogEntry> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let entry = LogEntry::from_new(id, log.clone());
        table.rows.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update_log(&self, id: i64, log: &NewLogEntry) -> Result<LogEntry> {
        let mut table = self.table.write().await;
        let entry = table.rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.apply(log.clone());
        Ok(entry.clone())
    }

    async fn delete_log(&self, id: i64) -> Result<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn count_logs(&self) -> Result<u64> {
        let table = self.table.read().await;
        Ok(table.rows.len() as u64)
    }
}
