//! Domain and wire types for GitHub repository contents.
//!
//! The `Fetched*` types are what the rest of the service works with; the
//! remaining types mirror the JSON shapes of the GitHub Contents API.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// One retrieved file with its body decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    /// File name (e.g., "main.rs")
    pub name: String,

    /// Full path within the repository (e.g., "src/main.rs")
    pub path: String,

    /// File body, decoded from the base64 transport encoding.
    pub content: String,
}

/// Result of resolving a repository path: a single file or a directory
/// of files.
///
/// Directory files are kept in the exact order of the GitHub listing;
/// nothing re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    File(FetchedFile),
    Directory(Vec<FetchedFile>),
}

/// Type of entry in a repository directory.
///
/// Maps to the `type` field of the Contents API. Only `File` entries are
/// fetched; everything else is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Regular file
    File,

    /// Directory (not recursed into)
    Dir,

    /// Symbolic link
    Symlink,

    /// Git submodule reference
    Submodule,
}

/// A file object as returned by `GET /repos/{owner}/{repo}/contents/{path}`
/// when the path names a single file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileObject {
    /// Entry name (e.g., "config.toml")
    pub name: String,

    /// Full path within the repository
    pub path: String,

    /// Entry type; anything other than `File` carries no `content`
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Base64-encoded file body (GitHub inserts line breaks every 60 chars)
    #[serde(default)]
    pub content: String,
}

/// A single entry of a directory listing returned by the Contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct DirEntry {
    /// Entry name
    pub name: String,

    /// Full path within the repository
    pub path: String,

    /// Entry type
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// API URL for retrieving this entry's content (includes the ref)
    pub url: String,
}

/// The two payload shapes the Contents API can answer with: a JSON array
/// (directory listing) or a single object (file).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Listing(Vec<DirEntry>),
    File(FileObject),
}
