//! Integration tests for `POST /generate`.

mod common;

use common::{fifteen_statements, valid_generate_body, TestApp};
use ideation_service::dtos::ProblemStatement;
use ideation_service::services::providers::mock::MockTextProvider;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn generate_rejects_missing_fields_without_calling_upstream() {
    let mock = Arc::new(MockTextProvider::with_text("unused"));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    // Each of the four profile fields absent in turn.
    for missing in ["category", "experience", "mode", "goals"] {
        let mut body = valid_generate_body();
        body.as_object_mut().unwrap().remove(missing);

        let response = client
            .post(format!("{}/generate", app.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 400, "{} missing", missing);
        let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(payload["error"], "missing input parameters");
    }

    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn generate_rejects_empty_fields_without_calling_upstream() {
    let mock = Arc::new(MockTextProvider::with_text("unused"));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let mut body = valid_generate_body();
    body["goals"] = json!("");

    let response = client
        .post(format!("{}/generate", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn generate_returns_fifteen_statements_unmodified() {
    let canned = fifteen_statements();
    let mock = Arc::new(MockTextProvider::with_text(canned.to_string()));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/generate", app.address))
        .json(&valid_generate_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(payload, canned, "upstream payload must pass through untouched");

    let statements: Vec<ProblemStatement> =
        serde_json::from_value(payload).expect("Failed to parse statements");
    assert_eq!(statements.len(), 15);
    for (i, statement) in statements.iter().enumerate() {
        assert_eq!(statement.s_no, i as i64 + 1);
        assert!(!statement.business_title.is_empty());
        assert!(!statement.detail.is_empty());
    }

    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn generate_accepts_numeric_experience() {
    let mock = Arc::new(MockTextProvider::with_text(fifteen_statements().to_string()));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let mut body = valid_generate_body();
    body["experience"] = json!(3);

    let response = client
        .post(format!("{}/generate", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(mock.call_count(), 1);

    let prompt = mock.last_prompt().expect("Provider should have been called");
    assert!(prompt.contains("Years of experience: 3"));
}

#[tokio::test]
async fn generate_surfaces_upstream_failure_and_stays_available() {
    let mock = Arc::new(MockTextProvider::failing("connection reset by peer"));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/generate", app.address))
        .json(&valid_generate_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(payload["error"], "Failed to generate response");
    assert!(payload["message"]
        .as_str()
        .expect("message field should be present")
        .contains("connection reset by peer"));

    // Failure is not fatal: the process keeps serving.
    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn generate_reports_unparseable_upstream_output_as_server_error() {
    let mock = Arc::new(MockTextProvider::with_text("definitely not json"));
    let app = TestApp::spawn(mock.clone()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/generate", app.address))
        .json(&valid_generate_body())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(payload["message"]
        .as_str()
        .expect("message field should be present")
        .contains("invalid JSON"));
}
