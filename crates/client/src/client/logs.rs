//! Log entry API operations.

use logit_core::log::{DeleteConfirmation, ListLogsQuery, LogEntry, NewLogEntry};

use super::LogitClient;
use crate::error::Result;

impl LogitClient {
    /// List log entries.
    pub async fn list_logs(&self, query: ListLogsQuery) -> Result<Vec<LogEntry>> {
        let response = self
            .client
            .get(self.url("/logs/"))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new log entry.
    pub async fn create_log(&self, log: &NewLogEntry) -> Result<LogEntry> {
        let response = self
            .client
            .post(self.url("/logs/"))
            .json(log)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get log entry by ID.
    pub async fn get_log(&self, id: i64) -> Result<LogEntry> {
        let response = self
            .client
            .get(self.url(&format!("/logs/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Overwrite a log entry by ID.
    pub async fn update_log(&self, id: i64, log: &NewLogEntry) -> Result<LogEntry> {
        let response = self
            .client
            .put(self.url(&format!("/logs/{}", id)))
            .json(log)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete log entry by ID.
    pub async fn delete_log(&self, id: i64) -> Result<DeleteConfirmation> {
        let response = self
            .client
            .delete(self.url(&format!("/logs/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
