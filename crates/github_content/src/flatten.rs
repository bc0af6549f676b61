//! Flattening of multi-file fetches into a single text blob.
//!
//! The marker and separator formats are a downstream contract: the review
//! prompt tells the model to treat `// File:` lines as file boundaries, so
//! they must stay stable and unlikely to collide with real source text.

use crate::models::FetchedFile;

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;

/// Marker prefix emitted before each file's content.
pub const FILE_MARKER_PREFIX: &str = "// File: ";

/// Separator emitted between consecutive files (not after the last).
pub const FILE_SEPARATOR: &str = "\n\n// ========================\n\n";

/// Concatenate files into one blob, preserving order.
///
/// Each file contributes a `// File: <path>` marker line followed by its
/// raw content; N files are joined by exactly N-1 separators. An empty
/// slice yields an empty string.
pub fn flatten(files: &[FetchedFile]) -> String {
    let mut combined = String::new();

    for (index, file) in files.iter().enumerate() {
        combined.push_str(FILE_MARKER_PREFIX);
        combined.push_str(&file.path);
        combined.push('\n');
        combined.push_str(&file.content);

        if index < files.len() - 1 {
            combined.push_str(FILE_SEPARATOR);
        }
    }

    combined
}
