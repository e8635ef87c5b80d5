use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid Groq API Key")]
    InvalidApiKey,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Model deprecated")]
    ModelDeprecated,

    #[error("LLM error: {0}")]
    Llm(LlmError),
}

impl From<LlmError> for AppError {
    /// Maps an upstream failure onto the three caller-visible error classes.
    fn from(err: LlmError) -> Self {
        let status = err.status();

        if matches!(status, Some(401) | Some(403))
            || err.mentions("authentication")
            || err.mentions("api key")
        {
            AppError::InvalidApiKey
        } else if status == Some(429) || err.mentions("rate limit") {
            AppError::RateLimited
        } else if err.mentions("decommissioned") {
            AppError::ModelDeprecated
        } else {
            AppError::Llm(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidApiKey => {
                tracing::error!("Groq rejected the configured API key");
                (
                    StatusCode::UNAUTHORIZED,
                    "INVALID_API_KEY",
                    "Invalid Groq API Key".to_string(),
                )
            }
            AppError::RateLimited => {
                tracing::warn!("Groq rate limit hit");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RATE_LIMITED",
                    "Rate limit exceeded".to_string(),
                )
            }
            AppError::ModelDeprecated => {
                tracing::error!("Configured Groq model has been decommissioned");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_DEPRECATED",
                    "Model deprecated. Update GROQ_MODEL in .env".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Groq API failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> LlmError {
        LlmError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_401_maps_to_invalid_api_key() {
        let err = AppError::from(api(401, "Invalid API Key"));
        assert!(matches!(err, AppError::InvalidApiKey));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authentication_message_maps_to_invalid_api_key() {
        let err = AppError::from(api(400, "Authentication failed for this request"));
        assert!(matches!(err, AppError::InvalidApiKey));
    }

    #[test]
    fn test_429_maps_to_rate_limited() {
        let err = AppError::from(api(429, "Too many requests"));
        assert!(matches!(err, AppError::RateLimited));
        assert_eq!(err.into_response().status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_rate_limit_message_without_429() {
        let err = AppError::from(api(503, "Rate limit reached for model"));
        assert!(matches!(err, AppError::RateLimited));
    }

    #[test]
    fn test_decommissioned_model() {
        let err = AppError::from(api(
            400,
            "The model `mixtral-8x7b-32768` has been decommissioned and is no longer supported",
        ));
        assert!(matches!(err, AppError::ModelDeprecated));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_other_failures_are_generic() {
        assert!(matches!(
            AppError::from(api(502, "upstream connect error")),
            AppError::Llm(_)
        ));
        assert!(matches!(
            AppError::from(LlmError::EmptyContent),
            AppError::Llm(_)
        ));
    }

    #[test]
    fn test_validation_is_bad_request() {
        let resp = AppError::Validation("Prompt is required".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
