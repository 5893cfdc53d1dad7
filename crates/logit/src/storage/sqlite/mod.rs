//! SQLite storage backend implementation.
//!
//! Implements `LogRepository` with `rusqlite` for synchronous operations and
//! `tokio-rusqlite` for async wrapping. Every repository call runs inside its
//! own transaction on the connection's worker thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
