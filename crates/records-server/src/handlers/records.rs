//! Record handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use records_types::{Record, RecordUpdate};
use serde::Serialize;
use tracing::{debug, info};

pub const DELETED_MESSAGE: &str = "Record deleted successfully";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Record>> {
    let records = state.store.list().await;
    debug!("Listing {} records", records.len());
    Json(records)
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(id) = path?;
    debug!("Fetching record {}", id);
    Ok(Json(state.store.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(record) = body?;
    let created = state.store.create(record).await?;
    info!("Created record {}", created.id);
    Ok(Json(created))
}

/// PUT keeps fields missing from the body, same as PATCH.
pub async fn replace(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<RecordUpdate>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(id) = path?;
    let Json(update) = body?;
    log_empty_update(id, &update);
    let record = state.store.replace(id, &update).await?;
    info!("Replaced record {}", id);
    Ok(Json(record))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<RecordUpdate>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(id) = path?;
    let Json(update) = body?;
    log_empty_update(id, &update);
    let record = state.store.update(id, &update).await?;
    info!("Updated record {}", id);
    Ok(Json(record))
}

fn log_empty_update(id: i64, update: &RecordUpdate) {
    if update.is_empty() {
        debug!("Update for record {} carries no fields", id);
    }
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let removed = state.store.delete(id).await;
    info!("Deleted record {} ({} removed)", id, removed);
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE,
    }))
}
