//! Health check operations.

use serde::{Deserialize, Serialize};

use super::{error_from_response, LogitClient};
use crate::error::Result;

/// Readiness probe body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Readiness {
    pub healthy: bool,
    pub logs: u64,
}

impl LogitClient {
    /// Liveness probe; succeeds when the server answers 200.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Readiness probe; fails with the server's error when storage is unreachable.
    pub async fn readyz(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        self.handle_response(response).await
    }
}
