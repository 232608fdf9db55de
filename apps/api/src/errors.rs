use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::upload::ImageError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid image format: {0}")]
    InvalidImage(#[from] ImageError),

    #[error("Image was blocked by the model's safety filters ({0})")]
    Blocked(String),

    #[error("API quota exceeded or rate limit reached. Please try again later.")]
    RateLimited,

    #[error("Gemini API key not configured. Please set GEMINI_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Invalid Gemini API key. Please check your GEMINI_API_KEY.")]
    InvalidApiKey,

    #[error("Gemini API error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::MissingApiKey,
            LlmError::Blocked { reason } => AppError::Blocked(reason),
            LlmError::Api { status: 429, .. } => AppError::RateLimited,
            LlmError::Api {
                status: 401 | 403, ..
            } => AppError::InvalidApiKey,
            other => {
                // Gemini reports bad keys as 400 INVALID_ARGUMENT, so sniff the text.
                let message = other.to_string();
                let lower = message.to_lowercase();
                if message.contains("API_KEY") || lower.contains("api key") {
                    AppError::InvalidApiKey
                } else if lower.contains("quota") || lower.contains("rate limit") {
                    AppError::RateLimited
                } else {
                    AppError::Llm(message)
                }
            }
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidImage(_) | AppError::Blocked(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::MissingApiKey
            | AppError::InvalidApiKey
            | AppError::Llm(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidImage(_) => "INVALID_IMAGE",
            AppError::Blocked(_) => "CONTENT_BLOCKED",
            AppError::RateLimited => "RATE_LIMITED",
            AppError::MissingApiKey => "API_KEY_MISSING",
            AppError::InvalidApiKey => "API_KEY_INVALID",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            other if status.is_server_error() => {
                tracing::error!("{other}");
                other.to_string()
            }
            other => {
                tracing::warn!("Rejected request: {other}");
                other.to_string()
            }
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}
