use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Nothing to analyze: empty text and no attachment
    #[error("Empty request: {0}")]
    EmptyRequest(String),
    /// Attachment failed validation (encoding, size, or media type)
    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),
    /// In-flight analysis limit reached
    #[error("Busy: {0}")]
    Busy(String),
    /// Upstream API error
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: StatusCode, message: String },
    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
    /// HTTP request error (preserves reqwest::Error for diagnostics)
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::EmptyRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::InvalidAttachment(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Busy(msg) => (StatusCode::TOO_MANY_REQUESTS, msg.clone()),
            Self::UpstreamError { status, message } => (*status, message.clone()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::HttpRequest(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::EmptyRequest(_) => "empty_request",
        AppError::InvalidAttachment(_) => "invalid_attachment",
        AppError::Busy(_) => "busy",
        AppError::UpstreamError { .. } => "upstream_error",
        AppError::InternalError(_) => "internal_error",
        AppError::HttpRequest(_) => "http_request_error",
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}
