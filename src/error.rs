use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::backend::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Slot already exists")]
    Duplicate,
    #[error("Slot not found")]
    NotFound,
    #[error("Already booked")]
    AlreadyBooked,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Storage failure: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for SlotError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => SlotError::Duplicate,
            other => SlotError::Storage(other),
        }
    }
}

impl IntoResponse for SlotError {
    fn into_response(self) -> Response {
        let status = match &self {
            SlotError::Duplicate | SlotError::AlreadyBooked | SlotError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            SlotError::NotFound => StatusCode::NOT_FOUND,
            SlotError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            SlotError::Storage(err) => {
                error!(?err, "request failed on storage access");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
