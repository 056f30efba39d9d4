use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::interpreter::DecodeError;
use crate::llm_client::GatewayError;
use crate::workflows::chain::StepError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StepError> for AppError {
    fn from(err: StepError) -> Self {
        match err {
            StepError::Gateway(e) => AppError::Gateway(e),
            StepError::Decode(e) => AppError::Decode(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, raw_response) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Gateway(e @ GatewayError::Http { .. }) => {
                tracing::error!("Model API error: {e}");
                (StatusCode::BAD_GATEWAY, "MODEL_API_ERROR", e.to_string(), None)
            }
            AppError::Gateway(e) => {
                tracing::error!("Model gateway error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_UNAVAILABLE",
                    format!("Error calling model API: {e}"),
                    None,
                )
            }
            AppError::Decode(e) => {
                tracing::warn!("Decode failure: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DECODE_ERROR",
                    e.to_string(),
                    Some(e.raw_text().to_string()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(raw) = raw_response {
            error["raw_response"] = json!(raw);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
