#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so axum handlers can return `Result<T, AppError>`.
/// The wire shape is `{"error": "<message>"}` — the portal frontend displays
/// the message verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("AI gateway rate limit hit")]
    RateLimited,

    #[error("AI gateway usage quota exhausted")]
    QuotaExceeded,

    #[error("AI gateway error (status {status:?}): {detail}")]
    Upstream {
        status: Option<u16>,
        detail: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.".to_string(),
            ),
            AppError::QuotaExceeded => (
                StatusCode::PAYMENT_REQUIRED,
                "AI usage limit reached. Please try again later.".to_string(),
            ),
            AppError::Upstream {
                status: code,
                detail,
            } => {
                tracing::error!("AI gateway error: {code:?} {detail}");
                let message = match code {
                    Some(code) => format!("AI gateway error: {code}"),
                    None => "AI gateway error".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => {
                AppError::Config("AI gateway API key is not configured".to_string())
            }
            LlmError::RateLimited => AppError::RateLimited,
            LlmError::QuotaExceeded => AppError::QuotaExceeded,
            LlmError::Gateway { status, message } => AppError::Upstream {
                status: Some(status),
                detail: message,
            },
            LlmError::EmptyContent => AppError::Upstream {
                status: None,
                detail: "gateway returned no assistant content".to_string(),
            },
            LlmError::Http(e) => AppError::Upstream {
                status: None,
                detail: e.to_string(),
            },
        }
    }
}
