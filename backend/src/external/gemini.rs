//! Gemini API client for treatment recommendations
//!
//! Calls the generateContent endpoint of the Google Generative Language API
//! and returns the model's reply as free-form text. The reply is untrusted:
//! it may or may not contain a JSON object, possibly wrapped in prose or
//! code fences. A single blocking call per request; no retry.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// generateContent response body
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a new GeminiClient
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a new GeminiClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Generate text from a prompt
    ///
    /// Returns the first candidate's text, trimmed. A response with no
    /// candidates yields the empty string, which downstream parsing treats
    /// as an empty recommendation.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Gemini(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Gemini(format!(
                "Gemini API error: {} - {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gemini(format!("Failed to parse Gemini response: {}", e)))?;

        let text = data
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "{\"confidence\": 0.9}"}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        assert_eq!(
            parsed.candidates[0]
                .content
                .as_ref()
                .unwrap()
                .parts[0]
                .text,
            "{\"confidence\": 0.9}"
        );
    }

    #[test]
    fn test_empty_response_deserialization() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
