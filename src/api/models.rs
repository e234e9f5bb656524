use crate::storage::{ProductStore, StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub const INVALID_DATA_FORMAT: &str = "Invalid Data Format";

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body missing, empty or unreadable
    EmptyBody,
    /// Body is not a product JSON object
    InvalidFormat,
    Internal(String),
}

pub const STORE_FAILURE: &str = "Product store unavailable";

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        // Driver error text stays in the log, never in the response.
        error!(error = %err, "Store operation failed");
        AppError::Internal(STORE_FAILURE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::EmptyBody => StatusCode::BAD_REQUEST.into_response(),
            AppError::InvalidFormat => {
                (StatusCode::EXPECTATION_FAILED, INVALID_DATA_FORMAT).into_response()
            }
            AppError::Internal(message) => {
                error!("Internal error: {}", message);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, Json(ErrorResponse {
                    error: status.to_string(),
                    message,
                }))
                .into_response()
            }
        }
    }
}
