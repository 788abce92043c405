//! Domain models for the Farmcare recommendation service
//!
//! Everything here lives for a single request/response cycle; nothing is
//! persisted or shared across requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::external::resend::EmailResponse;

/// A validated crop-disease report
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub plant_name: String,
    pub disease_percentage: f64,
    /// Key is required on the wire, but an absent/empty value renders as "None"
    pub previous_fertilizers: Option<String>,
    pub acres: f64,
    pub location: String,
    pub predicted_class: String,
    /// Destination address for the emailed report
    pub email: String,
}

impl RecommendationRequest {
    /// Fertilizer history as rendered into the prompt and report
    pub fn previous_fertilizers_label(&self) -> &str {
        self.previous_fertilizers.as_deref().unwrap_or("None")
    }
}

/// Untrusted structure extracted from the model's reply
///
/// Absent or partially shaped output degrades to the default (empty
/// schedule) rather than failing.
#[derive(Debug, Default, Deserialize)]
pub struct ModelRecommendation {
    pub confidence: Option<f64>,
    #[serde(default)]
    pub treatment_schedule: Vec<RawTreatmentEntry>,
}

/// One raw product entry as emitted by the model
#[derive(Debug, Deserialize)]
pub struct RawTreatmentEntry {
    pub product: Option<String>,
    pub timing: Option<String>,
    pub notes: Option<String>,
}

/// One dated application in the derived treatment schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub pesticide_name: String,
    pub scheduled_date: NaiveDate,
    pub completed: bool,
}

/// Success payload for POST /recommend
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: String,
    pub pesticides: Vec<String>,
    pub treatment_schedules: Vec<ScheduleEntry>,
    pub email_response: EmailResponse,
}
