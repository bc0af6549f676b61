//! Parsing of GitHub web URLs into owner/repo/path references.

use regex::Regex;
use std::sync::OnceLock;

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;

/// Matches `github.com/<owner>/<repo>` optionally followed by
/// `/blob/<ref>/<path>` or `/tree/<ref>/<path>`.
fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"github\.com/([^/]+)/([^/]+?)(?:\.git)?(?:/(?:blob|tree)/[^/]+/(.+?))?/?$")
            .expect("reference pattern is valid")
    })
}

/// A reference to content hosted on GitHub, extracted from a web URL.
///
/// An empty `path` means the repository root. Construction does not check
/// that the owner or repository exists; that is deferred to the fetch step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubReference {
    /// Repository owner (user or organization name)
    pub owner: String,

    /// Repository name, with any trailing `.git` stripped
    pub repo: String,

    /// Path within the repository; empty for the repository root
    pub path: String,
}

impl GithubReference {
    /// Parse a GitHub web URL into a reference.
    ///
    /// Recognized forms:
    /// - `https://github.com/owner/repo`
    /// - `https://github.com/owner/repo.git`
    /// - `https://github.com/owner/repo/blob/<ref>/<path>`
    /// - `https://github.com/owner/repo/tree/<ref>/<path>`
    ///
    /// Returns `None` when the string does not match; callers surface that
    /// as a validation failure rather than an error.
    pub fn parse(url: &str) -> Option<GithubReference> {
        let captures = reference_pattern().captures(url)?;

        let owner = captures.get(1)?.as_str().to_string();
        let repo = captures.get(2)?.as_str();
        let repo = repo.strip_suffix(".git").unwrap_or(repo).to_string();
        let path = captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Some(GithubReference { owner, repo, path })
    }
}
