//! High-level orchestration of the structural pass.
//!
//! Single entry point [`run_structure_pass`]: filter and bound the raw
//! files, match function-definition identifiers per file, assemble the
//! file → function graph, and flatten it for rendering. Pure and
//! synchronous; no IO happens here.

use crate::{
    export::vis::{flatten, VisEdge, VisNode},
    extract::{heuristics::extract_identifiers, snippets::extract_snippets},
    graph::assemble::assemble,
    model::source::FileRecord,
};
use anyhow::Result;
use tracing::info;

/// Artifacts of one structural pass over a repository's files.
pub struct StructureArtifacts {
    /// Retained, truncated source records (prompt input).
    pub records: Vec<FileRecord>,
    /// Renderable graph nodes in insertion order.
    pub nodes: Vec<VisNode>,
    /// Renderable graph edges in insertion order.
    pub edges: Vec<VisEdge>,
}

/// Runs snippet extraction, heuristic matching and graph assembly over raw
/// `(path, content)` pairs.
///
/// An empty input produces empty records and an empty graph; that is a
/// valid result, not an error.
#[tracing::instrument(level = "info", skip_all)]
pub fn run_structure_pass(raw_files: Vec<(String, String)>) -> Result<StructureArtifacts> {
    let records = extract_snippets(raw_files);

    let extractions: Vec<_> = records.iter().map(extract_identifiers).collect();
    let graph = assemble(&extractions)?;
    let (nodes, edges) = flatten(&graph);

    info!(
        files = records.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "structure pass finished"
    );

    Ok(StructureArtifacts {
        records,
        nodes,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_over_mixed_files() {
        let raw = vec![
            (
                "math.py".to_string(),
                "def add(a, b):\n    return a+b\ndef sub(a,b):\n    return a-b".to_string(),
            ),
            ("README.md".to_string(), "docs only".to_string()),
            ("a.go".to_string(), "func run(){}".to_string()),
        ];

        let out = run_structure_pass(raw).unwrap();
        assert_eq!(out.records.len(), 2);

        let ids: Vec<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["math.py", "math.py_add", "math.py_sub", "a.go", "a.go_run"]
        );
        assert_eq!(out.edges.len(), 3);
    }

    #[test]
    fn empty_repository_is_not_an_error() {
        let out = run_structure_pass(Vec::new()).unwrap();
        assert!(out.records.is_empty());
        assert!(out.nodes.is_empty());
        assert!(out.edges.is_empty());
    }
}
