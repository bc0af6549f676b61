//! Error types for the Gemini client.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur when requesting a review from Gemini.
///
/// None of these are retried; the API layer maps them all to an internal
/// server error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network failure or unreadable response body.
    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API returned status {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The API answered 200 but produced no usable review text.
    #[error("Gemini API returned no review text")]
    EmptyResponse,
}
