//! Error handling and HTTP error conversion
//!
//! Domain errors are converted to HTTP responses at this boundary and
//! nowhere else. Every error becomes a JSON envelope; raw stack traces
//! never reach the caller, and nothing is retried.
//!
//! The mapping is flat:
//! - missing input and GitHub fetch failures → 400 with a cause-specific message
//! - everything else (including generator failures) → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// JSON envelope returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, stable description of what went wrong
    pub error: String,

    /// Underlying detail, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error type returned by API handlers.
///
/// Each variant fixes the HTTP status and envelope wording; handler code
/// only decides which variant a failure belongs to.
#[derive(Debug)]
pub enum ApiError {
    /// Neither inline code nor a GitHub URL yielded non-blank text.
    MissingCode,

    /// Resolving the GitHub URL failed; the client error carries the
    /// user-facing detail message.
    GithubFetch(github_content::Error),

    /// Anything not already classified, including generator failures.
    Internal(anyhow::Error),
}

impl ApiError {
    /// Wrap an unclassified error.
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal(err.into())
    }

    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::MissingCode => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Code or GitHub URL is required".to_string(),
                    message: None,
                },
            ),
            ApiError::GithubFetch(cause) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Failed to fetch code from GitHub".to_string(),
                    message: Some(cause.to_string()),
                },
            ),
            ApiError::Internal(cause) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some(cause.to_string()),
                },
            ),
        }
    }
}

impl From<github_content::Error> for ApiError {
    fn from(err: github_content::Error) -> Self {
        ApiError::GithubFetch(err)
    }
}

impl From<gemini_client::Error> for ApiError {
    fn from(err: gemini_client::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        log_error(status, &body);

        (status, Json(body)).into_response()
    }
}

/// Log error responses server-side with a level keyed to the status.
fn log_error(status: StatusCode, body: &ErrorResponse) {
    let detail = body.message.as_deref().unwrap_or("");
    if status.is_server_error() {
        tracing::error!(%status, error = %body.error, detail, "API error");
    } else {
        tracing::warn!(%status, error = %body.error, detail, "API error");
    }
}
