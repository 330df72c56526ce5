use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

/// Message shown in the form when the summarizer gave no usable reason.
pub const FALLBACK_MESSAGE: &str = "Failed to process YouTube video";

/// The `{ "error": ... }` envelope used by both the proxy and the upstream service.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid YouTube URL format")]
    InvalidVideoUrl,

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Text displayed to the user for a failed submission.
    ///
    /// Only messages the summarizer chose to send back are shown verbatim;
    /// transport-level detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected(msg) => msg.clone(),
            AppError::InvalidVideoUrl => self.to_string(),
            AppError::Upstream(_) | AppError::BadRequest(_) | AppError::Config(_) => {
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidVideoUrl | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Rejected(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_shown_verbatim() {
        let err = AppError::Rejected("rate limited".to_string());
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn transport_failures_use_fallback_text() {
        let err = AppError::Upstream("connection refused".to_string());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::InvalidVideoUrl.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
