//! Prompt construction for the Gemini model
//!
//! Fixed template: a system-instruction block, an INPUT section echoing the
//! report fields, and an OUTPUT section showing the target JSON shape as a
//! worked example. Field values interpolate literally.

use crate::models::RecommendationRequest;

const SYSTEM_INSTRUCTIONS: &str = "\
You are an agronomy assistant. Suggest pesticide recommendations and treatment
schedules based on crop, disease, severity, and field details.
Return strictly JSON only.";

/// Render the recommendation prompt for a validated request
pub fn build_prompt(request: &RecommendationRequest) -> String {
    format!(
        r#"SYSTEM:
{instructions}

INPUT:
- plant_name: {plant_name}
- disease_percentage: {disease_percentage} %
- previous_fertilizers: {previous_fertilizers}
- acres: {acres}
- location: {location}
- predicted_class: {predicted_class}

OUTPUT:
Provide JSON strictly in this format:
{{
  "confidence": 0.9,
  "treatment_schedule": [
    {{
      "product": "Azoxystrobin + Difenoconazole",
      "timing": "Day 0",
      "notes": "Systemic fungicide"
    }},
    {{
      "product": "Mancozeb",
      "timing": "Day 7",
      "notes": "Protectant fungicide"
    }}
  ]
}}
"#,
        instructions = SYSTEM_INSTRUCTIONS,
        plant_name = request.plant_name,
        disease_percentage = request.disease_percentage,
        previous_fertilizers = request.previous_fertilizers_label(),
        acres = request.acres,
        location = request.location,
        predicted_class = request.predicted_class,
    )
}
