use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// The single failure kind this service distinguishes. Connection failures,
/// query errors, and timeouts all collapse into it; absence of a matching
/// row is never an error.
#[derive(Debug)]
pub enum ApiError {
    StoreUnavailable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every failure surfaces as a 500 with an opaque message; no
        // finer-grained status codes exist on this surface.
        let message = match self {
            ApiError::StoreUnavailable(msg) => msg,
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Storage error: {}", err);
        ApiError::StoreUnavailable("The notification store is unavailable".to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
