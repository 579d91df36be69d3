use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorBody;
use crate::solver::SolveError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Problem too large: {0}")]
    TooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SolveError> for AppError {
    fn from(e: SolveError) -> Self {
        match e {
            SolveError::TooLarge { .. } => AppError::TooLarge(e.to_string()),
            SolveError::Unreachable => AppError::Internal(anyhow::anyhow!(e)),
            SolveError::LengthMismatch { .. }
            | SolveError::InvalidPayload(_)
            | SolveError::ItemOutOfRange { .. }
            | SolveError::PrecisionLoss { .. } => AppError::Validation(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => {
                tracing::warn!("Rejected input: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::TooLarge(msg) => {
                tracing::warn!("Refused oversized problem: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PROBLEM_TOO_LARGE",
                    msg.clone(),
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

        let body = Json(ErrorBody {
            message,
            code: Some(code.to_string()),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::TooLarge("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_solve_error_mapping() {
        assert!(matches!(
            AppError::from(SolveError::TooLarge { limit: 10 }),
            AppError::TooLarge(_)
        ));
        assert!(matches!(
            AppError::from(SolveError::LengthMismatch {
                values: 1,
                volumes: 2
            }),
            AppError::Validation(ref m) if m == "Weights and values must have same length!"
        ));
        assert!(matches!(
            AppError::from(SolveError::PrecisionLoss { item: 0 }),
            AppError::Validation(_)
        ));
    }
}
