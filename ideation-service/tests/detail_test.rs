//! Integration tests for `POST /generate-detail`.

mod common;

use common::TestApp;
use ideation_service::services::providers::mock::MockTextProvider;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

const ANALYSIS_TEXT: &str = "1. Problem Overview\nSmall retailers lose sales because...";

#[tokio::test]
async fn detail_rejects_missing_fields_without_calling_upstream() {
    let mock = Arc::new(MockTextProvider::with_text(ANALYSIS_TEXT));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let bodies = [
        json!({ "user_data": { "category": "retail" } }),
        json!({ "business_title": "Local shops lack inventory visibility" }),
        json!({}),
    ];

    for body in bodies {
        let response = client
            .post(format!("{}/generate-detail", app.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 400);
        let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert!(payload["error"].is_string());
    }

    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn detail_passes_upstream_text_through_unchanged() {
    let mock = Arc::new(MockTextProvider::with_text(ANALYSIS_TEXT));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let user_data = json!({ "category": "retail", "experience": "3", "mode": "online", "goals": "scale" });
    let response = client
        .post(format!("{}/generate-detail", app.address))
        .json(&json!({
            "business_title": "Local shops lack inventory visibility",
            "user_data": user_data
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(payload["detailed_analysis"], ANALYSIS_TEXT);
    assert_eq!(mock.call_count(), 1);

    // The prompt carries the statement and the profile serialized verbatim.
    let prompt = mock.last_prompt().expect("Provider should have been called");
    assert!(prompt.contains("Local shops lack inventory visibility"));
    assert!(prompt.contains(&serde_json::to_string(&user_data).unwrap()));
}

#[tokio::test]
async fn detail_surfaces_upstream_failure_with_message() {
    let mock = Arc::new(MockTextProvider::failing("deadline exceeded"));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/generate-detail", app.address))
        .json(&json!({
            "business_title": "Local shops lack inventory visibility",
            "user_data": { "category": "retail" }
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(payload["error"], "Failed to generate response");
    assert!(payload["message"]
        .as_str()
        .expect("message field should be present")
        .contains("deadline exceeded"));
}
