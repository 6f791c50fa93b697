//! The two relay endpoints: problem-statement generation and detailed
//! analysis. Each handler validates the request, makes one provider call,
//! and shapes the response; failures surface to the caller and nothing is
//! retried.

use crate::dtos::{DetailRequest, DetailResponse, GenerateRequest};
use crate::prompts;
use crate::services::metrics;
use crate::services::providers::{GenerationParams, ProviderResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;

/// POST /generate: relay a founder profile to the model and return the
/// generated problem statements as parsed JSON, uninspected beyond the parse.
pub async fn generate_problem_statements(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (category, experience, mode, goals) = request
        .fields()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("missing input parameters")))?;

    let prompt = prompts::problem_statements_prompt(category, experience, mode, goals);
    let params = GenerationParams {
        output_schema: Some(prompts::problem_statements_schema()),
        ..Default::default()
    };

    let response = call_provider(&state, "generate", &prompt, &params).await?;

    let statements: serde_json::Value = serde_json::from_str(&response.text).map_err(|e| {
        tracing::error!(error = %e, "Upstream returned unparseable JSON");
        metrics::record_request("generate", &state.config.models.text_model, "error");
        AppError::Upstream(format!("upstream returned invalid JSON: {}", e))
    })?;

    metrics::record_request("generate", &state.config.models.text_model, "ok");
    Ok(Json(statements))
}

/// POST /generate-detail: relay one problem statement plus the founder
/// profile and pass the free-text analysis back untouched.
pub async fn generate_detailed_analysis(
    State(state): State<AppState>,
    Json(request): Json<DetailRequest>,
) -> Result<Json<DetailResponse>, AppError> {
    let (business_title, user_data) = request.fields().ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!("missing business_title or user_data"))
    })?;

    let profile_json = serde_json::to_string(user_data)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("failed to serialize user_data: {}", e)))?;

    let prompt = prompts::detailed_analysis_prompt(business_title, &profile_json);
    let params = GenerationParams {
        temperature: Some(prompts::DETAIL_TEMPERATURE),
        max_tokens: Some(prompts::DETAIL_MAX_OUTPUT_TOKENS),
        output_schema: None,
    };

    let response = call_provider(&state, "generate-detail", &prompt, &params).await?;

    metrics::record_request("generate-detail", &state.config.models.text_model, "ok");
    Ok(Json(DetailResponse {
        detailed_analysis: response.text,
    }))
}

/// One outbound provider call with latency, token, and error accounting.
async fn call_provider(
    state: &AppState,
    endpoint: &str,
    prompt: &str,
    params: &GenerationParams,
) -> Result<ProviderResponse, AppError> {
    let model = &state.config.models.text_model;
    let started = Instant::now();

    let result = state.provider.generate(prompt, params).await;
    metrics::observe_provider_latency(model, started.elapsed().as_secs_f64());

    match result {
        Ok(response) => {
            metrics::record_tokens(model, response.input_tokens, response.output_tokens);
            tracing::info!(
                endpoint,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                "Generation completed"
            );
            Ok(response)
        }
        Err(e) => {
            tracing::error!(endpoint, error = %e, "Provider call failed");
            metrics::record_provider_error(model, e.kind());
            metrics::record_request(endpoint, model, "error");
            Err(AppError::from(e))
        }
    }
}
