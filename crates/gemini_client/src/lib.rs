//! Client for the Google Gemini generative-language API.
//!
//! Wraps the single `generateContent` call this service needs: send source
//! code with a fixed code-review system instruction, get back a markdown
//! review. The review text is relayed to callers verbatim; no structure is
//! imposed on it here.

use std::time::Duration;

use tracing::{debug, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
use models::{Content, GenerateContentRequest, GenerateContentResponse};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Production endpoint of the generative-language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// System instruction sent with every review request.
///
/// The multi-file note at the end is keyed to the `// File:` markers the
/// content flattener emits.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert code reviewer. Your job is to review code with clarity, precision, and friendliness. Give helpful, constructive feedback — highlight strengths, point out issues, and suggest improvements. Use simple language and explain why something should be changed when necessary. Structure your response with clear sections like:\n\n✅ What's Good\n\n⚠️ Issues / Suggestions\n\n💡 Improvements / Best Practices\n\nBe concise but thorough. If the code is already good, acknowledge it and optionally suggest optimizations or cleaner syntax. Keep the tone encouraging and educational, like a senior developer mentoring a junior.\n\nIf the code contains multiple files (indicated by \"// File:\" comments), review each file separately and provide an overall summary at the end.";

/// Client for requesting code reviews from Gemini.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Create a client against a custom endpoint.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Request a review of `code`, optionally naming its language in the
    /// prompt.
    ///
    /// Returns the model's markdown review text unmodified. One call per
    /// invocation; failures are not retried.
    #[instrument(skip(self, code), fields(model = %self.model, code_len = code.len()))]
    pub async fn generate_review(
        &self,
        code: &str,
        language: Option<&str>,
    ) -> Result<String, Error> {
        let prompt = build_prompt(code, language);
        let request = GenerateContentRequest {
            system_instruction: Content::text(SYSTEM_INSTRUCTION),
            contents: vec![Content::text(prompt)],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let review = body.first_candidate_text().ok_or(Error::EmptyResponse)?;

        debug!(review_len = review.len(), "Received review from Gemini");
        Ok(review)
    }
}

/// Build the user prompt, prefixing a language hint when one was supplied.
fn build_prompt(code: &str, language: Option<&str>) -> String {
    match language {
        Some(language) if !language.trim().is_empty() => {
            format!("Review this {} code:\n\n{}", language, code)
        }
        _ => format!("Review this code:\n\n{}", code),
    }
}
