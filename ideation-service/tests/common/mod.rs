//! Test helper module for ideation-service integration tests.
//!
//! All tests substitute a mock provider for the Gemini client, so no network
//! access or API key is needed.

#![allow(dead_code)]

use ideation_service::config::{GoogleConfig, IdeationConfig, ModelConfig};
use ideation_service::services::providers::TextProvider;
use ideation_service::startup::Application;
use service_core::config::Config as CoreConfig;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

pub fn test_config() -> IdeationConfig {
    IdeationConfig {
        common: CoreConfig { port: 0 }, // Random port
        service_name: "ideation-service-test".to_string(),
        log_level: "warn".to_string(),
        otlp_endpoint: None,
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
        },
    }
}

impl TestApp {
    /// Spawn the service on a random port with the given provider.
    pub async fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self { address, port }
    }
}

/// A complete, valid body for `POST /generate`.
pub fn valid_generate_body() -> serde_json::Value {
    json!({
        "category": "retail",
        "experience": "3",
        "mode": "online",
        "goals": "scale"
    })
}

/// A well-formed upstream reply: 15 problem statements, serial numbers 1-15.
pub fn fifteen_statements() -> serde_json::Value {
    let items: Vec<serde_json::Value> = (1..=15)
        .map(|n| {
            json!({
                "s_no": n,
                "business_title": format!("Problem statement {}", n),
                "detail": format!("Why problem {} matters", n)
            })
        })
        .collect();
    serde_json::Value::Array(items)
}
