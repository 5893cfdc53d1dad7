//! Application state with repository-based storage.
//!
//! The state is cloned into every request handler. It holds the single
//! process-wide storage handle as a repository trait object; the concrete
//! backend is chosen at compile time via feature flags.

use std::sync::Arc;

use logit_core::storage::LogRepository;

#[cfg(any(feature = "sqlite", feature = "inmemory"))]
use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!("Must enable exactly one storage feature: 'sqlite' or 'inmemory'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Log repository backing every `/logs` handler.
    pub log_repo: Arc<dyn LogRepository>,
}

impl AppState {
    /// Creates an AppState around an already opened repository.
    pub fn with_repository(log_repo: Arc<dyn LogRepository>) -> Self {
        Self { log_repo }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            tracing::info!(path = %config.sqlite_path, "Opened SQLite storage");
            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Entries are lost when the process exits.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, entries will not be persisted");
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}
