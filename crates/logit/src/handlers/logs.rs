//! Log entry CRUD handlers.
//!
//! Each handler validates its input through axum extractors, then performs a
//! single repository call. Extraction failures are turned into
//! `ValidationError` before storage is touched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use logit_core::log::{DeleteConfirmation, ListLogsQuery, LogEntry, NewLogEntry, LOG_ENTITY};
use logit_core::storage::RepositoryError;

use crate::{
    handlers::{AppError, ValidationError},
    state::AppState,
};

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: LOG_ENTITY,
        id: id.to_string(),
    }
}

/// Create a new log entry (POST /logs/).
pub async fn create_log(
    State(state): State<AppState>,
    payload: Result<Json<NewLogEntry>, JsonRejection>,
) -> Result<Json<LogEntry>, AppError> {
    let Json(payload) = payload.map_err(ValidationError::from)?;

    let entry = state.log_repo.create_log(&payload).await?;

    tracing::info!(
        log_id = entry.id,
        section_number = entry.section_number,
        contractor_type = %entry.contractor_type,
        "Created log entry"
    );

    Ok(Json(entry))
}

/// List log entries (GET /logs/?skip=&limit=).
pub async fn list_logs(
    State(state): State<AppState>,
    query: Result<Query<ListLogsQuery>, QueryRejection>,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    let Query(query) = query.map_err(ValidationError::from)?;

    let logs = state.log_repo.list_logs(query.into()).await?;

    tracing::debug!(
        skip = query.skip,
        limit = query.limit,
        returned = logs.len(),
        "Listed log entries"
    );

    Ok(Json(logs))
}

/// Get a single log entry by ID (GET /logs/{id}).
pub async fn get_log(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<LogEntry>, AppError> {
    let Path(id) = id.map_err(ValidationError::from)?;

    match state.log_repo.get_log(id).await? {
        Some(entry) => Ok(Json(entry)),
        None => Err(not_found(id).into()),
    }
}

/// Update a log entry by ID (PUT /logs/{id}).
///
/// Overwrites all three business fields; the ID is preserved.
pub async fn update_log(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewLogEntry>, JsonRejection>,
) -> Result<Json<LogEntry>, AppError> {
    let Path(id) = id.map_err(ValidationError::from)?;
    let Json(payload) = payload.map_err(ValidationError::from)?;

    let entry = state.log_repo.update_log(id, &payload).await?;

    tracing::info!(log_id = id, "Updated log entry");

    Ok(Json(entry))
}

/// Delete a log entry by ID (DELETE /logs/{id}).
pub async fn delete_log(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    let Path(id) = id.map_err(ValidationError::from)?;

    state.log_repo.delete_log(id).await?;

    tracing::info!(log_id = id, "Deleted log entry");

    Ok(Json(DeleteConfirmation::deleted()))
}
