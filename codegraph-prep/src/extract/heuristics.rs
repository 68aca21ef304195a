//! Regex heuristics for function-definition identifiers.
//!
//! A fixed, ordered table of pattern families, one per language idiom.
//! For each pattern every non-overlapping match is taken in left-to-right
//! scan order and the captured identifier (group 1) is appended; results
//! from all families are concatenated, duplicates preserved.
//!
//! This is a lexical approximation, not a grammar: multi-line signatures,
//! nested declarations and idioms outside the table are silently missed.
//! An empty result is a sparse text, not an error.

use crate::model::source::{ExtractionResult, FileRecord};
use regex::Regex;

/// Pattern table in priority order. Group 1 captures the identifier.
const FUNCTION_PATTERNS: &[&str] = &[
    // Python `def`, module-level and indented (notebook cells)
    r"(?m)^\s*def\s+(\w+)\s*\(",
    // JavaScript named function
    r"function\s+(\w+)\s*\(",
    // Java public method with a simple/generic/array return type
    r"public\s+[\w<>\[\]]+\s+(\w+)\s*\(",
    // JS function expression assigned to a name
    r"(\w+)\s*=\s*function\s*\(",
    // Go
    r"func\s+(\w+)\s*\(",
    // Kotlin / Dart
    r"fun\s+(\w+)\s*\(",
    // React arrow component
    r"const\s+(\w+)\s*=\s*\([^)]*\)\s*=>",
];

/// Matches function-definition identifiers in one unit of source text.
///
/// Deterministic for a given text and table. Returns an empty vector when
/// no pattern family matches.
pub fn match_function_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    for pat in FUNCTION_PATTERNS {
        let re = Regex::new(pat).unwrap();
        for cap in re.captures_iter(text) {
            names.push(cap.get(1).unwrap().as_str().to_string());
        }
    }
    names
}

/// Runs the matcher over one file record.
pub fn extract_identifiers(record: &FileRecord) -> ExtractionResult {
    ExtractionResult {
        source_name: record.name.clone(),
        identifiers: match_function_names(&record.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_defs_in_order() {
        let text = "def add(a, b):\n    return a+b\ndef sub(a,b):\n    return a-b";
        assert_eq!(match_function_names(text), vec!["add", "sub"]);
    }

    #[test]
    fn indented_python_def_is_matched() {
        let text = "class C:\n    def method(self):\n        pass\n";
        assert_eq!(match_function_names(text), vec!["method"]);
    }

    #[test]
    fn go_func() {
        assert_eq!(match_function_names("func run(){}"), vec!["run"]);
    }

    #[test]
    fn js_named_and_assigned_functions() {
        let text = "function render(props) {}\nhandler = function (e) {};\n";
        assert_eq!(match_function_names(text), vec!["render", "handler"]);
    }

    #[test]
    fn react_arrow_component() {
        let text = "const App = () => {\n  return null;\n};\n";
        assert_eq!(match_function_names(text), vec!["App"]);
    }

    #[test]
    fn java_public_method() {
        let text = "public String greet(String name) { return name; }";
        assert_eq!(match_function_names(text), vec!["greet"]);
    }

    #[test]
    fn pattern_order_is_pattern_major() {
        // A Python def and a Go func in one text: the def family runs first
        // regardless of position in the text.
        let text = "func early(){}\ndef late(x):\n    pass\n";
        assert_eq!(match_function_names(text), vec!["late", "early"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let text = "function twice() {}\ntwice = function () {};\n";
        assert_eq!(match_function_names(text), vec!["twice", "twice"]);
    }

    #[test]
    fn no_idiom_yields_empty() {
        assert!(match_function_names("just some prose, no code at all").is_empty());
        assert!(match_function_names("").is_empty());
    }

    #[test]
    fn deterministic_across_runs() {
        let text = "def a():\n    pass\nfunction b() {}\nfunc c(){}";
        let first = match_function_names(text);
        let second = match_function_names(text);
        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "b", "c"]);
    }
}
