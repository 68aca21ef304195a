//! Two-level file → function graph assembly.
//!
//! The result is always a forest of depth exactly 2: file roots, function
//! leaves. No cycle detection or call-depth logic exists here.

use crate::model::{
    graph::{function_node_id, GraphEdgeLabel, GraphNode, NodeKind},
    source::ExtractionResult,
};
use anyhow::Result;
use petgraph::graph::{Graph, NodeIndex};
use std::collections::HashMap;
use tracing::debug;

/// Builds the structure graph from per-file extraction results.
///
/// Rules:
/// - one File node per distinct file name, created on first sight;
/// - one Function node per distinct `(file, identifier)` pair, id namespaced
///   via [`function_node_id`];
/// - a `Declares` edge from the file node to each of its function nodes.
///
/// Node and edge insertion order follows the input scan order, so repeated
/// assembly over the same input yields an identical graph.
pub fn assemble(extractions: &[ExtractionResult]) -> Result<Graph<GraphNode, GraphEdgeLabel>> {
    let mut g: Graph<GraphNode, GraphEdgeLabel> = Graph::new();
    let mut idx_by_id: HashMap<String, NodeIndex> = HashMap::new();

    for ex in extractions {
        let file_idx = match idx_by_id.get(&ex.source_name) {
            Some(i) => *i,
            None => {
                let i = g.add_node(GraphNode {
                    id: ex.source_name.clone(),
                    label: ex.source_name.clone(),
                    kind: NodeKind::File,
                });
                idx_by_id.insert(ex.source_name.clone(), i);
                i
            }
        };

        for ident in &ex.identifiers {
            let fn_id = function_node_id(&ex.source_name, ident);
            if idx_by_id.contains_key(&fn_id) {
                // Duplicate identifier in the same file: node and edge already exist.
                continue;
            }
            let i = g.add_node(GraphNode {
                id: fn_id.clone(),
                label: ident.clone(),
                kind: NodeKind::Function,
            });
            idx_by_id.insert(fn_id, i);
            g.add_edge(file_idx, i, GraphEdgeLabel::Declares);
        }
    }

    debug!(
        "assembled structure graph: nodes={}, edges={}",
        g.node_count(),
        g.edge_count()
    );
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(name: &str, idents: &[&str]) -> ExtractionResult {
        ExtractionResult {
            source_name: name.to_string(),
            identifiers: idents.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn canonical_python_scenario() {
        let g = assemble(&[ex("math.py", &["add", "sub"])]).unwrap();

        let ids: Vec<&str> = g.node_indices().map(|i| g[i].id.as_str()).collect();
        assert_eq!(ids, vec!["math.py", "math.py_add", "math.py_sub"]);
        assert_eq!(g[g.node_indices().next().unwrap()].kind, NodeKind::File);

        let edges: Vec<(String, String)> = g
            .edge_indices()
            .map(|e| {
                let (s, t) = g.edge_endpoints(e).unwrap();
                (g[s].id.clone(), g[t].id.clone())
            })
            .collect();
        assert_eq!(
            edges,
            vec![
                ("math.py".to_string(), "math.py_add".to_string()),
                ("math.py".to_string(), "math.py_sub".to_string()),
            ]
        );
    }

    #[test]
    fn same_identifier_in_two_files_gets_two_nodes() {
        let g = assemble(&[ex("a.go", &["run"]), ex("b.go", &["run"])]).unwrap();
        let ids: Vec<&str> = g.node_indices().map(|i| g[i].id.as_str()).collect();
        assert!(ids.contains(&"a.go_run"));
        assert!(ids.contains(&"b.go_run"));
        assert_eq!(ids.len(), 4);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn duplicate_identifiers_collapse_to_one_node() {
        let g = assemble(&[ex("app.js", &["init", "init"])]).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn no_dangling_edges() {
        let g = assemble(&[
            ex("a.py", &["f", "g"]),
            ex("b.py", &[]),
            ex("c.go", &["f"]),
        ])
        .unwrap();
        for e in g.edge_indices() {
            let (s, t) = g.edge_endpoints(e).unwrap();
            assert!(g.node_weight(s).is_some());
            assert!(g.node_weight(t).is_some());
        }
        // b.py still gets a file node even with no identifiers.
        assert!(g.node_indices().any(|i| g[i].id == "b.py"));
    }

    #[test]
    fn empty_input_yields_empty_graph() {
        let g = assemble(&[]).unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn assembly_is_idempotent() {
        let input = vec![ex("x.py", &["a", "b"]), ex("y.go", &["a"])];
        let g1 = assemble(&input).unwrap();
        let g2 = assemble(&input).unwrap();

        let ids1: Vec<String> = g1.node_indices().map(|i| g1[i].id.clone()).collect();
        let ids2: Vec<String> = g2.node_indices().map(|i| g2[i].id.clone()).collect();
        assert_eq!(ids1, ids2);
        assert_eq!(g1.edge_count(), g2.edge_count());
    }
}
