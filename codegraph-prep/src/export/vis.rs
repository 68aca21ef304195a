//! Flattened node/edge records for the interactive graph view.
//!
//! The in-memory petgraph structure is flattened into plain serializable
//! records the web layer can hand to a force-layout renderer unchanged.
//! Visual attributes are fixed per node kind: file nodes are larger and
//! styled distinctly from function nodes.

use crate::model::graph::{GraphEdgeLabel, GraphNode, NodeKind};
use petgraph::graph::Graph;
use serde::Serialize;

const FILE_NODE_SHAPE: &str = "box";
const FILE_NODE_COLOR: &str = "#4f8cc9";
const FILE_NODE_SIZE: u32 = 22;

const FUNCTION_NODE_SHAPE: &str = "dot";
const FUNCTION_NODE_COLOR: &str = "#97c2fc";
const FUNCTION_NODE_SIZE: u32 = 12;

/// One renderable node with its visual attributes.
#[derive(Debug, Clone, Serialize)]
pub struct VisNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub shape: &'static str,
    pub color: &'static str,
    pub size: u32,
}

/// One directed renderable edge, referencing node ids.
#[derive(Debug, Clone, Serialize)]
pub struct VisEdge {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Flattens the assembled graph into node/edge records in insertion order.
///
/// Every emitted edge references two ids present in the emitted node list.
pub fn flatten(graph: &Graph<GraphNode, GraphEdgeLabel>) -> (Vec<VisNode>, Vec<VisEdge>) {
    let mut nodes = Vec::with_capacity(graph.node_count());
    for nidx in graph.node_indices() {
        let n = &graph[nidx];
        let (shape, color, size) = match n.kind {
            NodeKind::File => (FILE_NODE_SHAPE, FILE_NODE_COLOR, FILE_NODE_SIZE),
            NodeKind::Function => (FUNCTION_NODE_SHAPE, FUNCTION_NODE_COLOR, FUNCTION_NODE_SIZE),
        };
        nodes.push(VisNode {
            id: n.id.clone(),
            label: n.label.clone(),
            kind: n.kind,
            shape,
            color,
            size,
        });
    }

    let mut edges = Vec::with_capacity(graph.edge_count());
    for eidx in graph.edge_indices() {
        if let Some((s, t)) = graph.edge_endpoints(eidx) {
            edges.push(VisEdge {
                source: graph[s].id.clone(),
                target: graph[t].id.clone(),
                label: graph[eidx].to_string(),
            });
        }
    }

    (nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::assemble::assemble;
    use crate::model::source::ExtractionResult;

    #[test]
    fn flatten_keeps_order_and_styling() {
        let g = assemble(&[ExtractionResult {
            source_name: "math.py".into(),
            identifiers: vec!["add".into(), "sub".into()],
        }])
        .unwrap();

        let (nodes, edges) = flatten(&g);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].id, "math.py");
        assert_eq!(nodes[0].shape, "box");
        assert!(nodes[0].size > nodes[1].size);
        assert_eq!(nodes[1].shape, "dot");

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source, "math.py");
        assert_eq!(edges[0].target, "math.py_add");
        assert_eq!(edges[0].label, "declares");
    }

    #[test]
    fn vis_node_serializes_kind_as_snake_case() {
        let g = assemble(&[ExtractionResult {
            source_name: "a.py".into(),
            identifiers: vec!["f".into()],
        }])
        .unwrap();
        let (nodes, _) = flatten(&g);

        let v = serde_json::to_value(&nodes).unwrap();
        assert_eq!(v[0]["kind"], "file");
        assert_eq!(v[1]["kind"], "function");
        assert_eq!(v[1]["id"], "a.py_f");
    }

    #[test]
    fn every_edge_endpoint_is_an_emitted_node() {
        let g = assemble(&[
            ExtractionResult {
                source_name: "a.go".into(),
                identifiers: vec!["run".into()],
            },
            ExtractionResult {
                source_name: "b.go".into(),
                identifiers: vec!["run".into()],
            },
        ])
        .unwrap();

        let (nodes, edges) = flatten(&g);
        for e in &edges {
            assert!(nodes.iter().any(|n| n.id == e.source));
            assert!(nodes.iter().any(|n| n.id == e.target));
        }
    }
}
