//! Generative-language service used for repository summarization.
//!
//! The crate wraps a single remote provider (Gemini) behind a small typed
//! client, with environment-driven configuration, a unified error type and
//! prompt compilation helpers. Calls are blocking single requests: no
//! streaming, no multi-turn context, no retries.

pub mod config;
pub mod error_handler;
pub mod prompt;
pub mod services;
