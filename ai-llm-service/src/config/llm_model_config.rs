use crate::config::llm_provider::LlmProvider;

/// Configuration for a generative-language model invocation.
///
/// Contains both general and provider-specific parameters; extend as
/// needed when new backends or features arrive.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// The provider/backend to call.
    pub provider: LlmProvider,

    /// Model identifier string (e.g., `"gemini-1.5-flash"`).
    pub model: String,

    /// API base URL (without the model-specific path).
    pub endpoint: String,

    /// API key for providers that require authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
