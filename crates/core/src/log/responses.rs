//! API response bodies other than the log entry itself.

use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub message: String,
}

impl WelcomeMessage {
    pub const GREETING: &'static str = "Hello, World! Welcome to the LogIt backend.";

    pub fn greeting() -> Self {
        Self {
            message: Self::GREETING.to_string(),
        }
    }
}

/// Body of a successful `DELETE /logs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub detail: String,
}

impl DeleteConfirmation {
    pub const DELETED: &'static str = "Log deleted successfully";

    pub fn deleted() -> Self {
        Self {
            detail: Self::DELETED.to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
