//! HTTP error handling and response conversion.
//!
//! Errors map to a status code plus a JSON body of the form
//! `{"state": "error", "kind": ..., "error": ...}`. Only user-safe text goes in
//! the body; details are logged.

use crate::domain::analysis::errors::AnalyzerError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing image or blank prompt (400).
    Validation,

    /// Upload could not be turned into a payload (422).
    Encode(String),

    /// Generation call failed for any reason (503).
    Analysis,

    /// Another analysis is still running (409).
    Busy,

    /// Malformed request that never reached the analyzer (400).
    BadRequest(String),

    /// Request body over the configured limit (413).
    PayloadTooLarge,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub state: String,
    pub kind: String,
    pub error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "Validation error: missing image or prompt"),
            Self::Encode(msg) => write!(f, "Encode error: {}", msg),
            Self::Analysis => write!(f, "Analysis error: generation failed"),
            Self::Busy => write!(f, "Busy: analysis already in flight"),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::PayloadTooLarge => write!(f, "Payload too large"),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Encode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Analysis => StatusCode::SERVICE_UNAVAILABLE,
            Self::Busy => StatusCode::CONFLICT,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation => AnalyzerError::Validation.kind(),
            Self::Encode(_) => "encode",
            Self::Analysis => AnalyzerError::Analysis.kind(),
            Self::Busy => AnalyzerError::Busy.kind(),
            Self::BadRequest(_) => "bad_request",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::Validation => AnalyzerError::Validation.to_string(),
            Self::Encode(msg) => msg.clone(),
            Self::Analysis => AnalyzerError::Analysis.to_string(),
            Self::Busy => AnalyzerError::Busy.to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::PayloadTooLarge => "The selected file is too large.".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!("error={}", self);
            }
            StatusCode::CONFLICT => {
                tracing::debug!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        let body = ErrorBody {
            state: "error".to_string(),
            kind: self.kind().to_string(),
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<AnalyzerError> for AppError {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::Validation => AppError::Validation,
            AnalyzerError::Encode(msg) => AppError::Encode(msg),
            AnalyzerError::Analysis => AppError::Analysis,
            AnalyzerError::Busy => AppError::Busy,
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::warn!(multipart_error = %err.body_text());
            AppError::PayloadTooLarge
        } else {
            tracing::warn!(multipart_error = %err.body_text());
            AppError::BadRequest("Malformed upload".into())
        }
    }
}
