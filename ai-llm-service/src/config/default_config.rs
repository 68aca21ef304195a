//! Default LLM configs loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `GEMINI_KEY`      = API key (mandatory)
//! - `GEMINI_MODEL`    = model id (optional, default `gemini-1.5-flash`)
//! - `GEMINI_URL`      = API base (optional, default Google endpoint)
//! - `LLM_MAX_TOKENS`  = optional max output tokens (u32)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{env_opt_u32, must_env, AiLlmError},
};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Constructs the summarization config for Gemini.
///
/// A missing `GEMINI_KEY` is a config error here, which surfaces as an
/// authentication failure before any request leaves the process.
///
/// # Defaults
/// - `temperature = Some(0.2)`
/// - `timeout_secs = Some(120)`
pub fn config_gemini_flash() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GEMINI_KEY")?;
    let model = std::env::var("GEMINI_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
    let endpoint = std::env::var("GEMINI_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GEMINI_URL.to_string());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.2),
        top_p: None,
        timeout_secs: Some(120),
    })
}
