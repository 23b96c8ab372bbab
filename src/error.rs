use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
///
/// Absence of a record is NOT an error: the stores report it with
/// `Option`/`bool` sentinels and the handlers serialize those directly.
/// Only malformed requests surface here, rejected before the store is
/// touched.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Invalid query parameter: {0}")]
    Query(#[from] QueryRejection),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Body(ref e) => {
                tracing::warn!("Rejected request body: {}", e);
                e.body_text()
            }
            AppError::Query(ref e) => {
                tracing::warn!("Rejected query string: {}", e);
                e.body_text()
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
