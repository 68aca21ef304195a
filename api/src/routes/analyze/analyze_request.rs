use serde::Deserialize;

/// Request body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Repository identifier in `owner/name` form.
    pub repository: String,
}
