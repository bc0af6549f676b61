//! HTTP request handlers
//!
//! Handlers translate HTTP requests to client calls and client results to
//! HTTP responses. All orchestration for the review endpoint lives in
//! [`get_review`]; everything else in the request lifecycle is
//! pass-through.

use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::{errors::ApiError, models::request::ReviewRequest, AppState};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// POST /ai/get-review
///
/// Review flow, in order:
/// 1. A present, non-blank `githubUrl` is resolved to file content; the
///    fetched (and, for directories, flattened) text supersedes any inline
///    `code`. Fetch failures answer 400 with the cause-specific message.
/// 2. If the resulting text is still blank, answer 400.
/// 3. Otherwise ask the generator for a review and return its markdown
///    text verbatim as the 200 body. Generator failures answer 500.
pub async fn get_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<String, ApiError> {
    let mut code = request.code.unwrap_or_default();

    if let Some(url) = request.github_url.as_deref() {
        if !url.trim().is_empty() {
            info!(url, "Resolving GitHub URL to code");
            code = state.github.fetch_code(url).await?;
        }
    }

    if code.trim().is_empty() {
        return Err(ApiError::MissingCode);
    }

    debug!(
        code_len = code.len(),
        language = request.language.as_deref().unwrap_or("unspecified"),
        "Requesting review"
    );

    let review = state
        .gemini
        .generate_review(&code, request.language.as_deref())
        .await?;

    Ok(review)
}

/// GET /
///
/// Liveness probe.
pub async fn index() -> &'static str {
    "CodeCritic review service is running"
}
