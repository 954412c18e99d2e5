use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every engine operation returns either a fully validated result or exactly
/// one of these variants — partial results are never surfaced, and nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation service unreachable: {0}")]
    TransportUnavailable(String),

    /// The conversational turn's response was not the expected strict JSON
    /// envelope. Carries the raw model output for logging; the caller's
    /// profile is left untouched.
    #[error("Malformed generation output")]
    MalformedGenerationOutput { raw: String },

    #[error("Analysis generation failed for scholarship {scholarship_id}: {reason}")]
    AnalysisGenerationFailed {
        scholarship_id: String,
        reason: String,
    },

    #[error("Match generation failed: {0}")]
    MatchGenerationFailed(String),

    #[error("Essay generation failed: {0}")]
    EssayGenerationFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::TransportUnavailable(msg) => {
                tracing::error!("Generation service unreachable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_UNAVAILABLE",
                    "The generation service could not be reached".to_string(),
                )
            }
            AppError::MalformedGenerationOutput { raw } => {
                tracing::error!("Malformed generation output: {raw}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_GENERATION_OUTPUT",
                    "The generation service returned an unusable response".to_string(),
                )
            }
            AppError::AnalysisGenerationFailed {
                scholarship_id,
                reason,
            } => {
                tracing::error!("Analysis failed for scholarship {scholarship_id}: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_GENERATION_FAILED",
                    format!("Analysis could not be generated for scholarship {scholarship_id}"),
                )
            }
            AppError::MatchGenerationFailed(reason) => {
                tracing::error!("Match generation failed: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MATCH_GENERATION_FAILED",
                    "The match could not be generated".to_string(),
                )
            }
            AppError::EssayGenerationFailed(reason) => {
                tracing::error!("Essay generation failed: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ESSAY_GENERATION_FAILED",
                    "The essay could not be generated".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
