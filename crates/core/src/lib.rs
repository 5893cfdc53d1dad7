//! logit_core - domain types and storage contracts for LogIt.
//!
//! Following the Functional Core pattern, nothing in this crate performs I/O:
//!
//! - `log`: the log entry shapes and the request/response types shared by the
//!   server and the client
//! - `storage`: the repository trait, pagination and error types implemented
//!   by the storage backends

pub mod log;
pub mod storage;
