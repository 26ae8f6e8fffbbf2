use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use player_stats_db::PoolError;
use player_stats_lib::{ServiceError, SettingsError};
use serde_json::json;
use thiserror::Error;

/// Failures that stop the server process before or while serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Database connection failed: {0}")]
    Database(#[from] PoolError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An error response with a `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a service outcome to a response. Persistence failures are logged
    /// and replaced by the operation's generic `failure` message.
    pub fn from_service(err: ServiceError, failure: &'static str) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::NotFound => Self::not_found(ServiceError::NotFound.to_string()),
            ServiceError::Persistence(source) => {
                match &source {
                    PoolError::Exhausted(_) => log::error!("{failure}: pool exhausted: {source}"),
                    PoolError::Timeout(_) => log::error!("{failure}: query timed out: {source}"),
                    _ => log::error!("{failure}: {source}"),
                }
                Self::internal(failure)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
