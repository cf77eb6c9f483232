//! Application error type and its HTTP rendering.
//!
//! Two errors belong to the public short URL contract and are reported
//! in-band with status `200` and a flat body:
//!
//! - [`AppError::InvalidUrl`] → `{"error": "invalid url"}`
//! - [`AppError::ShortUrlNotFound`] → `{"error": "No short URL found for the given input"}`
//!
//! Everything else uses the structured body
//! `{"error": {"code": ..., "message": ..., "details": ...}}` with a matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::validation_service::ValidationError;

/// Message returned for any rejected submission.
pub const INVALID_URL_MESSAGE: &str = "invalid url";

/// Message returned when a short URL does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for the given input";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Structured error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct InBandError {
    error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL failed validation. The cause is kept for logging only.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] ValidationError),

    #[error("short url not found")]
    ShortUrlNotFound,

    #[error("{message}")]
    BadRequest { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for the unique-constraint conflict raised by the store.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Converts the error into a structured payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidUrl(_) => ErrorInfo {
                code: "invalid_url",
                message: INVALID_URL_MESSAGE.to_string(),
                details: json!({}),
            },
            AppError::ShortUrlNotFound => ErrorInfo {
                code: "not_found",
                message: NOT_FOUND_MESSAGE.to_string(),
                details: json!({}),
            },
            AppError::BadRequest { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Conflict { message, details } => ErrorInfo {
                code: "conflict",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl(_) => {
                return (
                    StatusCode::OK,
                    Json(InBandError {
                        error: INVALID_URL_MESSAGE,
                    }),
                )
                    .into_response();
            }
            AppError::ShortUrlNotFound => {
                return (
                    StatusCode::OK,
                    Json(InBandError {
                        error: NOT_FOUND_MESSAGE,
                    }),
                )
                    .into_response();
            }
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Invalid request parameters", json!(e))
    }
}
