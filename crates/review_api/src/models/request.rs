//! HTTP request type definitions

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// HTTP request to generate a code review.
///
/// All fields are optional at the HTTP layer; the handler enforces that
/// either `code` or `githubUrl` yields non-blank text. When both are
/// supplied and the fetch succeeds, the fetched content supersedes `code`.
///
/// # Example
///
/// ```json
/// {
///   "code": "fn main() {}",
///   "language": "Rust"
/// }
/// ```
///
/// # GitHub URL Example
///
/// ```json
/// {
///   "githubUrl": "https://github.com/owner/repo/blob/main/src/lib.rs",
///   "language": "Rust"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    /// Inline source code to review
    pub code: Option<String>,

    /// Language hint forwarded to the review prompt
    pub language: Option<String>,

    /// GitHub URL to fetch the code from instead
    pub github_url: Option<String>,
}
