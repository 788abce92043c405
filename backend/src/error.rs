//! Error handling for the Farmcare recommendation service
//!
//! Every error response shares the wire shape `{"status":"fail","error":...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing input; user-correctable
    #[error("{0}")]
    Validation(String),

    /// Missing provider credential, detected before any external call
    #[error("Missing {0}")]
    Configuration(String),

    /// Transport or API failure from the Gemini provider
    #[error("{0}")]
    Gemini(String),

    /// Model output contained braces but the substring between them was not
    /// valid JSON
    #[error("{0}")]
    ModelOutput(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct FailResponse {
    pub status: String,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Gemini(_) | AppError::ModelOutput(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            status,
            Json(FailResponse {
                status: "fail".to_string(),
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
