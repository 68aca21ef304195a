use ai_llm_service::config::{
    default_config::config_gemini_flash, llm_model_config::LlmModelConfig,
};

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
///
/// Read-only after startup; handlers receive it behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// API base for GitHub, e.g. "https://api.github.com".
    pub github_api_base: String,
    /// Token for the GitHub API (PAT or app token).
    pub github_token: String,
    /// Configuration for the summarization model.
    pub llm_config: LlmModelConfig,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Missing `GITHUB_TOKEN` or `GEMINI_KEY` fail here, at boot, rather
    /// than on the first request that needs them.
    pub fn from_env() -> AppResult<Self> {
        let github_api_base = std::env::var("GITHUB_API_BASE")
            .unwrap_or_else(|_| "https://api.github.com".into());

        let github_token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(AppError::MissingEnv("GITHUB_TOKEN"))?;

        let llm_config = config_gemini_flash()?;

        Ok(Self {
            github_api_base,
            github_token,
            llm_config,
        })
    }
}
