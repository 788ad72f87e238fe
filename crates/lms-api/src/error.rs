use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// User-facing fallback for storage failures. The underlying error is
/// logged, never leaked to the client.
pub const STORAGE_FAILURE_MESSAGE: &str = "Oops! something went wrong. Try again";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation Error: {0}")]
    Validation(String),
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Machine-readable error code, stable across message wording changes.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Database(_) => "storage",
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            // Storage failures keep the legacy 400 envelope rather than a
            // 5xx so clients treat them as retryable form-level errors.
            Self::Validation(_) | Self::Database(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Database(error) => {
                tracing::error!("database error: {error}");
                STORAGE_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (
            self.status(),
            Json(json!({
                "code": self.code(),
                "error": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::Validation(String::new()).code(), "validation");
        assert_eq!(ApiError::Unauthenticated.code(), "unauthenticated");
        assert_eq!(ApiError::Forbidden(String::new()).code(), "forbidden");
        assert_eq!(ApiError::NotFound("course").code(), "not_found");
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolTimedOut).code(),
            "storage"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Forbidden(String::new()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::NotFound("quiz").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolTimedOut).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("course").to_string(), "course not found");
    }
}
