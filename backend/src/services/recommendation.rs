//! Recommendation orchestration
//!
//! Drives a single request through validation, prompt construction, the
//! model call, output extraction, schedule derivation, report rendering,
//! and the email attempt. Email failure is embedded in the success payload;
//! every other failure aborts the request.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::external::{GeminiClient, ResendClient};
use crate::models::RecommendationResponse;
use crate::services::{prompt, report, schedule, validation};

/// Recommendation service
pub struct RecommendationService {
    gemini: GeminiClient,
    resend: ResendClient,
}

impl RecommendationService {
    pub fn new(gemini: GeminiClient, resend: ResendClient) -> Self {
        Self { gemini, resend }
    }

    /// Process one crop-disease report end to end
    pub async fn recommend(
        &self,
        payload: &Map<String, Value>,
    ) -> AppResult<RecommendationResponse> {
        let request = validation::validate(payload)?;

        tracing::debug!(
            plant = %request.plant_name,
            disease = %request.predicted_class,
            "Requesting treatment recommendation"
        );

        let prompt = prompt::build_prompt(&request);
        let reply = self.gemini.generate(&prompt).await?;
        let recommendation = schedule::extract_recommendation(&reply)?;

        let today = Utc::now().date_naive();
        let (treatment_schedules, pesticides) =
            schedule::build_schedule(&recommendation.treatment_schedule, today);

        tracing::debug!(
            products = pesticides.len(),
            "Derived treatment schedule"
        );

        let html = report::render_schedule_email(&request, &treatment_schedules);
        let subject = format!("Treatment Schedule for {}", request.plant_name);
        let email_response = self.resend.send(&request.email, &subject, &html).await;

        Ok(RecommendationResponse {
            status: "success".to_string(),
            pesticides,
            treatment_schedules,
            email_response,
        })
    }
}
