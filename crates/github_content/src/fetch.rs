//! Client for the GitHub Contents API.
//!
//! One inbound review request maps to one contents request, plus one extra
//! request per file when the path resolves to a directory. Sub-requests run
//! sequentially and the first failure aborts the whole fetch; partial
//! results are never returned.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::flatten::flatten;
use crate::models::{ContentsResponse, EntryType, FetchedContent, FetchedFile, FileObject};
use crate::reference::GithubReference;
use crate::Error;

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;

/// Production endpoint of the Contents API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("codecritic/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Unauthenticated client for fetching public repository contents.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client against the production GitHub API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API endpoint.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Resolve a parsed reference to its content.
    ///
    /// A path naming a single file yields [`FetchedContent::File`]. A path
    /// naming a directory yields [`FetchedContent::Directory`] with one
    /// entry per `file`-typed listing entry, in listing order; entries of
    /// other types (subdirectories, symlinks, submodules) are skipped, not
    /// recursed into.
    #[instrument(skip(self), fields(owner = %reference.owner, repo = %reference.repo, path = %reference.path))]
    pub async fn fetch(&self, reference: &GithubReference) -> Result<FetchedContent, Error> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, reference.owner, reference.repo, reference.path
        );

        match self.get_json::<ContentsResponse>(&url).await? {
            ContentsResponse::File(file) => {
                if file.entry_type != EntryType::File {
                    return Err(Error::UnsupportedContent);
                }
                debug!(path = %file.path, "Fetched single file");
                Ok(FetchedContent::File(decode_file(file)?))
            }
            ContentsResponse::Listing(entries) => {
                let mut files = Vec::new();
                for entry in entries {
                    if entry.entry_type != EntryType::File {
                        debug!(path = %entry.path, entry_type = ?entry.entry_type, "Skipping non-file entry");
                        continue;
                    }
                    let file: FileObject = self.get_json(&entry.url).await?;
                    files.push(decode_file(file)?);
                }
                debug!(file_count = files.len(), "Fetched directory listing");
                Ok(FetchedContent::Directory(files))
            }
        }
    }

    /// Resolve a GitHub web URL straight to review-ready text.
    ///
    /// Parses the URL, fetches its content, and flattens directory results
    /// into a single marker-delimited string.
    #[instrument(skip(self))]
    pub async fn fetch_code(&self, url: &str) -> Result<String, Error> {
        let reference = GithubReference::parse(url).ok_or(Error::InvalidUrl)?;

        match self.fetch(&reference).await? {
            FetchedContent::File(file) => Ok(file.content),
            FetchedContent::Directory(files) => Ok(flatten(&files)),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, ACCEPT_HEADER)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if let Some(error) = classify_status(response.status()) {
            return Err(error);
        }

        Ok(response.json::<T>().await?)
    }
}

/// Flat status-to-error mapping for Contents API responses.
///
/// Returns `None` for success statuses.
fn classify_status(status: StatusCode) -> Option<Error> {
    match status {
        StatusCode::NOT_FOUND => Some(Error::NotFound),
        StatusCode::FORBIDDEN => Some(Error::RateLimited),
        status if !status.is_success() => Some(Error::Status(status.as_u16())),
        _ => None,
    }
}

/// Decode a file object's base64 body into text.
///
/// GitHub wraps the base64 payload with newlines; whitespace is stripped
/// before decoding.
fn decode_file(file: FileObject) -> Result<FetchedFile, Error> {
    let cleaned: String = file
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = BASE64
        .decode(cleaned.as_bytes())
        .map_err(|e| Error::Decode(format!("invalid base64 content for {}: {}", file.path, e)))?;

    let content = String::from_utf8(bytes)
        .map_err(|e| Error::Decode(format!("{} is not valid UTF-8: {}", file.path, e)))?;

    Ok(FetchedFile {
        name: file.name,
        path: file.path,
        content,
    })
}
