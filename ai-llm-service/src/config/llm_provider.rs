/// Represents the provider (backend) used for generative-language calls.
///
/// Only Gemini is wired up today. Adding another provider (e.g., a local
/// runtime or a different hosted API) means extending this enum and adding
/// a service module next to the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Google's Gemini REST API.
    Gemini,
}
