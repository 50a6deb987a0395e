//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache layer and its HTTP surface.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in the store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Stored bytes do not match the requested decode strategy
    #[error("Decode failed: {0}")]
    Decode(String),

    /// The store rejected or failed a command
    #[error("Store error: {0}")]
    Store(String),

    /// The store could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Writing a report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::Decode(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            CacheError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            CacheError::Connection(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            CacheError::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
