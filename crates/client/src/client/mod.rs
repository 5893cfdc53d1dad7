//! HTTP client for the LogIt API.

pub mod health;
pub mod logs;

use logit_core::log::{ErrorDetail, WelcomeMessage};

use crate::error::{ClientError, Result};

/// HTTP client for the LogIt API.
#[derive(Debug, Clone)]
pub struct LogitClient {
    client: reqwest::Client,
    base_url: String,
}

impl LogitClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the welcome message (GET /).
    pub async fn welcome(&self) -> Result<WelcomeMessage> {
        let response = self.client.get(self.url("/")).send().await?;
        self.handle_response(response).await
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Turn a non-success response into a `ClientError`, preferring the server's
/// `detail` message over the raw body.
async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = serde_json::from_str::<ErrorDetail>(&body)
        .map(|e| e.detail)
        .unwrap_or(body);

    if status == 404 {
        ClientError::NotFound { resource: message }
    } else {
        ClientError::ServerError { status, message }
    }
}
