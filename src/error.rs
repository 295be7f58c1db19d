//! Error handling
//!
//! Engine errors (`ValidationError`, `ProfileError`) and the unified API
//! error that turns them into consistent HTTP responses.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Required form fields, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Purpose,
    Attire,
    Background,
    Vibe,
}

impl RequiredField {
    pub const ORDER: [RequiredField; 4] = [
        RequiredField::Purpose,
        RequiredField::Attire,
        RequiredField::Background,
        RequiredField::Vibe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::Purpose => "purpose",
            RequiredField::Attire => "attire",
            RequiredField::Background => "background",
            RequiredField::Vibe => "vibe",
        }
    }

    /// User-facing complaint shown when the field is missing.
    pub fn complaint(&self) -> &'static str {
        match self {
            RequiredField::Purpose => "⚠️ Please select a purpose for your portrait",
            RequiredField::Attire => "⚠️ Please select your preferred attire",
            RequiredField::Background => "⚠️ Please select a background style",
            RequiredField::Vibe => "⚠️ Please select your desired vibe",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.complaint())]
    MissingField(RequiredField),

    #[error("⚠️ Unsupported resolution: {0}")]
    UnsupportedResolution(String),

    #[error("⚠️ Custom notes exceed {max} characters")]
    NotesTooLong { max: usize },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Profile {filename} is unreadable: {reason}")]
    CorruptData { filename: String, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize profile: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProfileError {
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error body. `request_id` is filled in by the request-ID middleware.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unprocessable(_) => "CORRUPT_DATA",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Unprocessable(msg) => msg.clone(),
            // Don't leak internal error details
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::Validation(e) => e.into(),
            ProfileError::NotFound(name) => Self::NotFound(format!("Profile not found: {name}")),
            corrupt @ ProfileError::CorruptData { .. } => Self::Unprocessable(corrupt.to_string()),
            other => Self::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");
            }
            _ => {
                tracing::warn!(error = %self, "API error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
            request_id: None,
        };

        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
