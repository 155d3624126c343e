//! HTTP error mapping

use crate::storage::StoreError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

pub const NOT_FOUND_DETAIL: &str = "Record not found";
pub const CONFLICT_DETAIL: &str = "Record with this ID already exists";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request failed basic type checking (path or body)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_DETAIL.to_string())
            }
            ApiError::Store(StoreError::Conflict(_)) => {
                (StatusCode::BAD_REQUEST, CONFLICT_DETAIL.to_string())
            }
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        warn!("Request rejected ({}): {}", status, self);
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, detail) = ApiError::from(StoreError::NotFound(9)).status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, NOT_FOUND_DETAIL);

        let (status, detail) = ApiError::from(StoreError::Conflict(1)).status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, CONFLICT_DETAIL);

        let (status, detail) =
            ApiError::Validation("missing field `value`".to_string()).status_and_detail();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(detail, "missing field `value`");
    }

    #[test]
    fn test_display_keeps_store_message() {
        let err = ApiError::from(StoreError::Conflict(1));
        assert_eq!(err.to_string(), "Record with id 1 already exists");
    }
}
