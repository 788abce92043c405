//! Request validation for crop-disease reports
//!
//! Checks key presence and numeric well-formedness only. No range bounds,
//! no non-empty checks beyond presence.

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::RecommendationRequest;

/// Required request keys, in the order they are reported when missing.
/// `previous_fertilizers` is required for presence even though an absent or
/// empty value is rendered as "None" downstream.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "plant_name",
    "disease_percentage",
    "previous_fertilizers",
    "acres",
    "location",
    "predicted_class",
    "email",
];

/// Validate a decoded request body and build a typed request from it
pub fn validate(payload: &Map<String, Value>) -> AppResult<RecommendationRequest> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|key| !payload.contains_key(*key))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing: {}",
            missing.join(", ")
        )));
    }

    let disease_percentage = numeric_value(&payload["disease_percentage"]);
    let acres = numeric_value(&payload["acres"]);

    let (Some(disease_percentage), Some(acres)) = (disease_percentage, acres) else {
        return Err(AppError::Validation(
            "disease_percentage and acres must be numbers.".to_string(),
        ));
    };

    Ok(RecommendationRequest {
        plant_name: text_value(&payload["plant_name"]),
        disease_percentage,
        previous_fertilizers: optional_text_value(&payload["previous_fertilizers"]),
        acres,
        location: text_value(&payload["location"]),
        predicted_class: text_value(&payload["predicted_class"]),
        email: text_value(&payload["email"]),
    })
}

/// Accepts a JSON number or a string parseable as one
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Null and empty-string values collapse to None so they render as "None"
fn optional_text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
