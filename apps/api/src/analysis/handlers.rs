//! Axum route handlers for the Resume Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::extract::try_parse;
use crate::analysis::mode::AnalysisMode;
use crate::errors::AppError;
use crate::state::AppState;

/// Request body: the pasted resume and the requested analysis mode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub action: AnalysisMode,
}

/// Response envelope. `result` carries the mode-shaped JSON value, or
/// `{"rawContent": <reply>}` when the model's reply did not parse.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: Value,
    pub action: AnalysisMode,
}

/// POST /api/v1/resume/analyze
///
/// Builds the mode-specific prompt pair, makes exactly one gateway call,
/// and normalizes the reply. An unparsable reply is not an error: the
/// caller still gets a 200 carrying the raw text so it can display
/// something.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText cannot be empty".to_string(),
        ));
    }

    // Checked before the gateway call so a misconfigured deployment fails
    // fast with zero outbound traffic.
    if state.config.gateway_api_key.is_none() {
        return Err(AppError::Config(
            "AI gateway API key is not configured".to_string(),
        ));
    }

    info!("Processing {} request", request.action.as_str());

    let prompt = request.action.prompt_pair(&request.resume_text);

    let reply = state.llm.complete(prompt.system, &prompt.user).await?;

    let result = match try_parse(&reply) {
        Some(value) => value,
        None => {
            info!("Reply is not valid JSON, returning raw content");
            json!({ "rawContent": reply })
        }
    };

    Ok(Json(AnalyzeResponse {
        result,
        action: request.action,
    }))
}
