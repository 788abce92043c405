//! Health check handlers

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: DateTime<Utc>,
}

/// Health check endpoint handler
/// GET /
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: Utc::now(),
    })
}
