//! Configuration module for ideation-service.

use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct IdeationConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model for both structured-JSON and free-text generation.
    pub text_model: String,
}

impl IdeationConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "ideation-service".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok(),
            google: GoogleConfig {
                // The relay must not come up without its upstream credential.
                api_key: core_config::require_env("GOOGLE_API_KEY", None)?,
            },
            models: ModelConfig {
                text_model: core_config::require_env("GENAI_TEXT_MODEL", Some("gemini-2.0-flash"))?,
            },
        })
    }
}
