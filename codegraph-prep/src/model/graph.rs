//! Graph-related types shared across the assembler and exporters.
//!
//! Edge labels serialize to snake_case strings, keeping exported artifacts
//! stable and grep-friendly.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Separator used to namespace function node ids under their owning file.
///
/// A file name containing this sequence could in principle collide with a
/// composite id; the flat scheme is kept because exported ids are part of
/// the UI contract.
pub const NODE_ID_SEPARATOR: &str = "_";

/// Node kind in the two-level structure graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Function,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeKind::File => "file",
            NodeKind::Function => "function",
        };
        f.write_str(s)
    }
}

/// One node of the structure graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Globally unique id within one assembly run.
    ///
    /// File nodes use the file name itself; function nodes are namespaced
    /// via [`function_node_id`] so same-named functions in different files
    /// never collide.
    pub id: String,
    /// Human-readable label shown by the UI.
    pub label: String,
    pub kind: NodeKind,
}

/// Unified graph edge label.
///
/// The structure graph is deliberately a depth-2 forest: the only relation
/// is a file declaring a function. No call edges are inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphEdgeLabel {
    Declares,
}

impl Display for GraphEdgeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphEdgeLabel::Declares => f.write_str("declares"),
        }
    }
}

/// Builds the namespaced id for a function node.
pub fn function_node_id(file: &str, identifier: &str) -> String {
    format!("{file}{NODE_ID_SEPARATOR}{identifier}")
}
