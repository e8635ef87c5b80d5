//! Axum route handlers for the video pipeline API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::video::options::VideoOptions;
use crate::video::pipeline::{enhance_prompt, extract_options, generate_script};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EnhancePromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub options: Option<VideoOptions>,
}

#[derive(Debug, Serialize)]
pub struct EnhancePromptResponse {
    pub enhanced_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub script: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/extract-options
///
/// Pulls duration / language / platform / size / category out of a free-text idea.
/// Fields the model did not mention come back as empty strings.
pub async fn handle_extract_options(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<VideoOptions>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;
    let prompt = require_prompt(request.prompt)?;

    let options = extract_options(&prompt, state.llm.as_ref()).await?;
    Ok(Json(options))
}

/// POST /api/enhance-prompt
pub async fn handle_enhance_prompt(
    State(state): State<AppState>,
    payload: Result<Json<EnhancePromptRequest>, JsonRejection>,
) -> Result<Json<EnhancePromptResponse>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;
    let prompt = require_prompt(request.prompt)?;
    let options = request.options.unwrap_or_default();

    let enhanced_prompt = enhance_prompt(&prompt, &options, state.llm.as_ref()).await?;
    Ok(Json(EnhancePromptResponse { enhanced_prompt }))
}

/// POST /api/generate-script
///
/// The client sends the enhanced prompt when it has one, else the raw idea.
pub async fn handle_generate_script(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<GenerateScriptResponse>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;
    let prompt = require_prompt(request.prompt)?;

    let script = generate_script(&prompt, state.llm.as_ref()).await?;
    Ok(Json(GenerateScriptResponse { script }))
}

fn require_prompt(prompt: Option<String>) -> Result<String, AppError> {
    prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Prompt is required".to_string()))
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}
