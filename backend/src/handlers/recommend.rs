//! HTTP handler for the recommendation endpoint

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::external::{GeminiClient, ResendClient};
use crate::models::RecommendationResponse;
use crate::services::RecommendationService;
use crate::AppState;

/// Response for CORS pre-flight requests
#[derive(Debug, Serialize)]
pub struct PreflightResponse {
    pub status: String,
}

/// Handle a crop-disease report
/// POST /recommend
pub async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<RecommendationResponse>> {
    // The Gemini credential gates the whole endpoint; checked before the
    // body is even decoded
    let api_key = state
        .config
        .gemini
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AppError::Configuration("Gemini API key".to_string()))?;

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::Validation("Expected JSON body".to_string()))?;
    let payload = payload
        .as_object()
        .ok_or_else(|| AppError::Validation("Expected JSON body".to_string()))?;

    let gemini = GeminiClient::new(api_key.to_string(), state.config.gemini.model.clone());
    let resend = ResendClient::new(
        state.config.resend.api_key.clone(),
        state.config.resend.from_address.clone(),
    );

    let service = RecommendationService::new(gemini, resend);
    let response = service.recommend(payload).await?;

    Ok(Json(response))
}

/// Handle CORS pre-flight for the recommendation endpoint
/// OPTIONS /recommend
pub async fn recommend_preflight() -> Json<PreflightResponse> {
    Json(PreflightResponse {
        status: "ok".to_string(),
    })
}
