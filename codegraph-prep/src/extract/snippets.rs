//! Snippet extraction: extension allow-list plus bounded truncation.
//!
//! Files outside the allow-list are skipped silently (they still count in
//! the repository listing, just not here). Content is capped to keep the
//! downstream prompt and graph cost bounded.

use crate::model::source::FileRecord;
use tracing::debug;

/// Upper bound on retained characters per file.
pub const MAX_SNIPPET_CHARS: usize = 5000;

/// Extensions considered for structural extraction.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".jsx", ".json", ".c", ".go", ".ipynb",
];

/// Returns true when the file name carries an allow-listed extension.
pub fn is_source_file(name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Truncates to at most `max_chars` characters without splitting a UTF-8
/// character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Filters raw `(name, content)` pairs down to bounded [`FileRecord`]s.
///
/// Listing order is preserved; excluded files are logged at debug level and
/// dropped.
pub fn extract_snippets<I>(files: I) -> Vec<FileRecord>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut records = Vec::new();
    for (name, content) in files {
        if !is_source_file(&name) {
            debug!(file = %name, "skipping non-source file");
            continue;
        }
        let content = truncate_chars(&content, MAX_SNIPPET_CHARS).to_string();
        records.push(FileRecord { name, content });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_filters_by_extension() {
        let files = vec![
            ("main.py".to_string(), "def a(): pass".to_string()),
            ("README.md".to_string(), "# readme".to_string()),
            ("logo.png".to_string(), "binary-ish".to_string()),
            ("server.go".to_string(), "func run(){}".to_string()),
        ];
        let records = extract_snippets(files);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["main.py", "server.go"]);
    }

    #[test]
    fn truncation_bounds_content() {
        let long = "x".repeat(MAX_SNIPPET_CHARS + 100);
        let records = extract_snippets(vec![("big.js".to_string(), long)]);
        assert_eq!(records[0].content.chars().count(), MAX_SNIPPET_CHARS);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Multi-byte chars near the cut must not panic or split.
        let text: String = "é".repeat(MAX_SNIPPET_CHARS + 5);
        let cut = truncate_chars(&text, MAX_SNIPPET_CHARS);
        assert_eq!(cut.chars().count(), MAX_SNIPPET_CHARS);
    }

    #[test]
    fn short_content_is_kept_whole() {
        let records = extract_snippets(vec![("a.c".to_string(), "int x;".to_string())]);
        assert_eq!(records[0].content, "int x;");
    }
}
