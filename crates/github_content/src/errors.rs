//! Error types for GitHub content operations.
//!
//! Every variant's `Display` text is user-facing: the API layer forwards
//! these messages verbatim in its error envelope, so the wording here is
//! part of the HTTP contract.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while resolving a GitHub URL to file content.
///
/// Failures are never retried; each one is surfaced immediately to the
/// caller with a message tailored to its cause.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL does not look like a GitHub repository, blob, or tree URL.
    #[error("Invalid GitHub URL. Please use format: https://github.com/owner/repo or https://github.com/owner/repo/blob/branch/path")]
    InvalidUrl,

    /// The Contents API returned 404 for the requested path.
    ///
    /// Requests are unauthenticated, so private repositories also surface
    /// as 404.
    #[error("Repository or file not found. Make sure the repository is public.")]
    NotFound,

    /// The Contents API returned 403.
    ///
    /// For unauthenticated requests this is almost always the hourly
    /// rate limit.
    #[error("GitHub API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The Contents API returned an unexpected non-success status.
    #[error("Failed to fetch from GitHub: GitHub API returned status {0}")]
    Status(u16),

    /// A network or response-body failure from the underlying HTTP client.
    #[error("Failed to fetch from GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    /// The file body could not be decoded from its transport encoding.
    #[error("Failed to fetch from GitHub: {0}")]
    Decode(String),

    /// The Contents API answered with a payload of an unsupported type,
    /// such as a symlink or submodule at the requested path.
    #[error("Failed to fetch from GitHub: unsupported content type at the requested path")]
    UnsupportedContent,
}
