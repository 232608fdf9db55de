//! Axum route handler for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::analyzer::{run_analysis, AnalysisOptions, AnalysisReport};
use crate::analysis::upload::decode_image_payload;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64 image, optionally prefixed with a data URL header.
    #[serde(default)]
    pub image: Option<String>,
}

/// POST /analyze
///
/// Decodes the uploaded image, asks the vision model to describe it, and
/// scores the description against the rubric.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    if !state.model.is_configured() {
        return Err(AppError::MissingApiKey);
    }

    let Json(body) =
        payload.map_err(|rejection| reject_body(rejection, state.config.max_upload_bytes))?;
    if is_empty_payload(&body) {
        return Err(AppError::Validation("No data provided".to_string()));
    }

    let request: AnalyzeRequest = serde_json::from_value(body)
        .map_err(|_| AppError::Validation("No image provided".to_string()))?;
    let raw = request
        .image
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No image provided".to_string()))?;

    // Base64 of a large photo is real CPU work; keep it off the async workers.
    let decoded = tokio::task::spawn_blocking(move || decode_image_payload(&raw))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!(
        "Analyzing {} image {}x{} ({} bytes)",
        decoded.payload.mime_type, decoded.width, decoded.height, decoded.byte_len
    );

    let options = AnalysisOptions {
        roast_enabled: state.config.roast_enabled,
    };
    let report = run_analysis(state.model.as_ref(), &state.rubric, &decoded.payload, options).await?;

    Ok(Json(report))
}

fn reject_body(rejection: JsonRejection, limit: usize) -> AppError {
    match rejection {
        JsonRejection::BytesRejection(ref r) if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::Validation(format!(
                "Image too large: request body exceeds the upload limit of {limit} bytes"
            ))
        }
        _ => AppError::Validation("No data provided".to_string()),
    }
}

/// `null`, `{}`, `[]`, `""`, `false` and `0` carry nothing to analyze.
fn is_empty_payload(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
