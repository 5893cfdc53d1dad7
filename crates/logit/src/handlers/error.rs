use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use logit_core::log::ErrorDetail;
use logit_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

/// A request that failed to extract: malformed body, path or query.
///
/// Produced from axum's extractor rejections before any storage session is
/// opened. Malformed input is answered with 422; a body that could not be
/// read at all (e.g. over the size limit) keeps axum's status.
#[derive(Debug, Error)]
#[error("{detail}")]
pub struct ValidationError {
    pub status: StatusCode,
    pub detail: String,
}

impl ValidationError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.into(),
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match &rejection {
            JsonRejection::BytesRejection(_) => rejection.status(),
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on any error in handlers. The response status is
/// picked by downcasting: `ValidationError` carries its own status, `RepositoryError` follows
/// `repository_error_to_status_code`, anything else is 500. The body is always
/// `{"detail": ...}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        if let Some(validation) = self.0.downcast_ref::<ValidationError>() {
            (validation.status, validation.detail.clone())
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            (
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                repo_error.detail(),
            )
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status, detail = %detail, "Request rejected");
        }

        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
