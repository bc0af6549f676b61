//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields this service reads or writes are modeled; everything
//! else in the API responses is ignored.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

/// A content block: an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a single-part text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// One text part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate.
    ///
    /// Returns `None` when the response carries no candidates or the first
    /// candidate has no text.
    pub fn first_candidate_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
