use codegraph_prep::export::vis::{VisEdge, VisNode};
use repo_context_engine::activity::DayCount;
use serde::Serialize;

/// Response data for `POST /analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub repository: String,
    pub description: Option<String>,
    pub commit_count: u64,
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
    /// Present when the summarization call succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Present when the summarization call failed; the graph and commit
    /// data are still returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_error: Option<String>,
    pub commit_activity: Vec<DayCount>,
}
