//! API request types for log operations.
//!
//! Shared between the server and the client.

use serde::{Deserialize, Serialize};

use crate::storage::Page;

/// Query parameters for listing logs (`GET /logs/?skip=&limit=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLogsQuery {
    /// Number of entries to skip (default: 0). Negative values skip nothing.
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of entries to return (default: 100). Negative values
    /// lift the limit.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    Page::DEFAULT_LIMIT as i64
}

impl Default for ListLogsQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl ListLogsQuery {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

impl From<ListLogsQuery> for Page {
    /// Follows SQLite's `LIMIT`/`OFFSET` rules: a negative offset is 0 and a
    /// negative limit means no limit.
    fn from(query: ListLogsQuery) -> Self {
        let skip = u64::try_from(query.skip).unwrap_or(0);
        match u64::try_from(query.limit) {
            Ok(limit) => Page::new(skip, limit),
            Err(_) => Page::unbounded(skip),
        }
    }
}
