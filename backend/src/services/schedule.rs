//! Model output extraction and treatment schedule derivation
//!
//! The model replies with free-form text. Extraction takes the window from
//! the first `{` to the last `}`: no window at all degrades to an empty
//! recommendation, while a window holding invalid JSON is a hard error that
//! fails the request. That asymmetry is contractual.

use chrono::{Duration, NaiveDate};

use crate::error::{AppError, AppResult};
use crate::models::{ModelRecommendation, RawTreatmentEntry, ScheduleEntry};

/// Days between consecutive applications
const CADENCE_DAYS: i64 = 7;

/// Fallback name for entries the model emitted without a product
const UNKNOWN_PRODUCT: &str = "Unknown";

/// Extract the recommendation JSON from the model's raw reply
pub fn extract_recommendation(text: &str) -> AppResult<ModelRecommendation> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) => {
            if start > end {
                return Err(AppError::ModelOutput(
                    "Model returned invalid JSON: unbalanced braces".to_string(),
                ));
            }
            serde_json::from_str(&text[start..=end])
                .map_err(|e| AppError::ModelOutput(format!("Model returned invalid JSON: {}", e)))
        }
        _ => Ok(ModelRecommendation::default()),
    }
}

/// Derive the dated schedule and the parallel pesticide-name list
///
/// Entries keep the model's order; the Nth entry (1-indexed) is dated
/// `today + 7*(N-1)` days and starts out not completed.
pub fn build_schedule(
    entries: &[RawTreatmentEntry],
    today: NaiveDate,
) -> (Vec<ScheduleEntry>, Vec<String>) {
    let mut schedules = Vec::with_capacity(entries.len());
    let mut pesticides = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        let pesticide_name = entry
            .product
            .clone()
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        pesticides.push(pesticide_name.clone());
        schedules.push(ScheduleEntry {
            pesticide_name,
            scheduled_date: today + Duration::days(idx as i64 * CADENCE_DAYS),
            completed: false,
        });
    }

    (schedules, pesticides)
}
