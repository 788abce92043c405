//! Configuration management for the Farmcare recommendation service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARMCARE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Gemini generative AI configuration
    pub gemini: GeminiConfig,

    /// Resend email delivery configuration
    pub resend: ResendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Gemini API key; requests fail with a configuration error when unset
    pub api_key: Option<String>,

    /// Model identifier used for generateContent calls
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    /// Resend API key; email delivery degrades to a structured failure when unset
    pub api_key: Option<String>,

    /// Sender identity for outgoing reports
    pub from_address: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMCARE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("gemini.model", "gemini-1.5-flash")?
            .set_default("resend.from_address", "Farmcare <onboarding@resend.dev>")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMCARE prefix)
            .add_source(
                Environment::with_prefix("FARMCARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}
