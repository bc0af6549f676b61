//! CodeCritic REST API
//!
//! HTTP surface of the CodeCritic review service. It exposes a single
//! review endpoint that accepts source code or a GitHub URL, resolves the
//! URL to file content when needed, forwards the code to the review
//! generator, and relays the markdown review back verbatim.
//!
//! This crate exists in the HTTP layer and handles request/response
//! translation, error mapping to the JSON envelope, routing, and server
//! startup. The GitHub and Gemini clients live in their own crates and
//! never depend on this one.

use gemini_client::GeminiClient;
use github_content::ContentClient;

pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

// Re-export key types for convenience
pub use errors::{ApiError, ErrorResponse};
pub use models::request::ReviewRequest;
pub use server::{ApiConfig, ApiServer};

/// Default API port
pub const DEFAULT_PORT: u16 = 3000;

/// Application state shared across handlers.
///
/// Both clients are cheaply cloneable handles over shared connection
/// pools; no mutable state crosses requests.
#[derive(Clone)]
pub struct AppState {
    /// Client for resolving GitHub URLs to file content
    pub github: ContentClient,

    /// Client for the review generator
    pub gemini: GeminiClient,
}

impl AppState {
    /// Create new application state with the given service clients.
    pub fn new(github: ContentClient, gemini: GeminiClient) -> Self {
        Self { github, gemini }
    }
}
