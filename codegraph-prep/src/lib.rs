//! Structural preparation of a remote repository for visualization and
//! summarization.
//!
//! The crate turns raw `(path, text)` pairs into:
//! - bounded source snippets filtered by an extension allow-list,
//! - heuristically matched function-definition identifiers,
//! - a two-level file → function graph with flattened records for the UI.
//!
//! The extraction step is a lexical heuristic, not a parser: it applies a
//! fixed, ordered regex table and gives no grammar-level guarantee.

pub mod export;
pub mod extract;
pub mod graph;
pub mod model;
pub mod run;
