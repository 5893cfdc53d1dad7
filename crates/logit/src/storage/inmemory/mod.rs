//! In-memory storage backend.
//!
//! Stores log entries in an ordered map wrapped in `Arc<RwLock<_>>`. Nothing
//! is persisted; useful for tests and for running without a database file.
//!
//! # Example
//!
//! ```rust,ignore
//! use logit::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
