//! Resend API client for email delivery
//!
//! Email delivery is a best-effort side effect: every failure, including a
//! missing API key, is folded into a structured `{"success":false,"error"}`
//! payload instead of an error, so it never fails the overall request.

use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.resend.com/emails";

/// Resend API client
#[derive(Clone)]
pub struct ResendClient {
    http_client: Client,
    api_key: Option<String>,
    from_address: String,
    api_url: String,
}

/// Request to send an email
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

/// Provider payload for an accepted email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

/// Structured failure carried inside an otherwise-successful response
#[derive(Debug, Clone, Serialize)]
pub struct EmailFailure {
    pub success: bool,
    pub error: String,
}

/// Outcome of an email send attempt
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EmailResponse {
    Sent(SentEmail),
    Failed(EmailFailure),
}

impl EmailResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed(EmailFailure {
            success: false,
            error: error.into(),
        })
    }
}

impl ResendClient {
    /// Create a new ResendClient
    pub fn new(api_key: Option<String>, from_address: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            from_address,
            api_url: API_URL.to_string(),
        }
    }

    /// Create a new ResendClient with custom API URL (for testing)
    pub fn with_api_url(api_key: Option<String>, from_address: String, api_url: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            from_address,
            api_url,
        }
    }

    /// Send an HTML email, reporting the outcome without raising
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> EmailResponse {
        let Some(api_key) = self.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return EmailResponse::failed("Missing Resend API key");
        };

        match self.try_send(api_key, to, subject, html).await {
            Ok(sent) => EmailResponse::Sent(sent),
            Err(error) => {
                tracing::warn!("Email delivery failed: {}", error);
                EmailResponse::failed(error)
            }
        }
    }

    async fn try_send(
        &self,
        api_key: &str,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<SentEmail, String> {
        let request = SendEmailRequest {
            from: &self.from_address,
            to: vec![to],
            subject,
            html,
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Resend API request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Resend API error: {} - {}", status, body));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Resend response: {}", e))
    }
}
