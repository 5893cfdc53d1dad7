//! logit_client - CLI client for the LogIt API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::LogitClient;
pub use error::{ClientError, Result};
