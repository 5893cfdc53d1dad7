//! Storage backend implementations.
//!
//! Concrete implementations of `logit_core::storage::LogRepository`, selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: in-memory storage, nothing is persisted
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p logit --no-default-features --features inmemory
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;
