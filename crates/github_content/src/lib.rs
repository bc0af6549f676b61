//! Crate for resolving GitHub web URLs into raw file content.
//!
//! This crate turns a `github.com` URL pasted by a user into review-ready
//! text: it parses the URL into an owner/repo/path triple, fetches the
//! referenced file (or every file of the referenced directory) through the
//! GitHub Contents API, and flattens multi-file results into a single string
//! with per-file markers.
//!
//! Only public repositories are supported; requests are unauthenticated.

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{EntryType, FetchedContent, FetchedFile};

pub mod reference;
pub use reference::GithubReference;

pub mod fetch;
pub use fetch::ContentClient;

pub mod flatten;
pub use flatten::{flatten, FILE_MARKER_PREFIX, FILE_SEPARATOR};
