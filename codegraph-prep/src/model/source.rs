//! Input records for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// One retrieved repository file paired with its (already truncated) text.
///
/// Records are immutable once created and live only for the duration of a
/// single analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Repo-relative file path as reported by the repository listing.
    pub name: String,
    /// UTF-8 text content, bounded by [`crate::extract::snippets::MAX_SNIPPET_CHARS`].
    pub content: String,
}

/// Ordered, duplicate-preserving identifier list matched in one file.
///
/// Order reflects pattern priority first, then left-to-right occurrence in
/// the text. Duplicates are kept on purpose: assembly dedups by node id,
/// not by identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Name of the file the identifiers were matched in.
    pub source_name: String,
    /// Matched identifiers in scan order.
    pub identifiers: Vec<String>,
}
