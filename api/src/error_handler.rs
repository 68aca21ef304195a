use ai_llm_service::error_handler::AiLlmError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use repo_context_engine::errors::{RepoContextError, RepoProviderError};
use thiserror::Error;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingEnv(_) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        ApiResponse::<()>::error(self.error_code(), self.to_string(), Vec::new())
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert common Axum rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Convert `RepoContextError` to `AppError::Http` with precise HTTP status
/// & code. The provider sub-errors are typed, so no text heuristics are
/// needed here.
impl From<RepoContextError> for AppError {
    fn from(err: RepoContextError) -> Self {
        match err {
            RepoContextError::Validation(msg) => AppError::BadRequest(msg),
            RepoContextError::Decode(msg) => AppError::Http {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: "DECODE_ERROR",
                message: format!("File content is not valid text: {msg}"),
            },
            RepoContextError::Internal(msg) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "INTERNAL_ERROR",
                message: msg,
            },
            RepoContextError::Provider(p) => match p {
                RepoProviderError::Unauthorized | RepoProviderError::Forbidden => AppError::Http {
                    status: StatusCode::UNAUTHORIZED,
                    code: "UNAUTHORIZED",
                    message: format!(
                        "The repository could not be accessed with the configured token: {p}"
                    ),
                },
                RepoProviderError::NotFound => AppError::Http {
                    status: StatusCode::NOT_FOUND,
                    code: "REPO_NOT_FOUND",
                    message: "Repository not found or not accessible.".into(),
                },
                RepoProviderError::RateLimited { .. } => AppError::Http {
                    status: StatusCode::TOO_MANY_REQUESTS,
                    code: "RATE_LIMITED",
                    message: "The hosting API rate limit was hit.".into(),
                },
                RepoProviderError::Timeout => AppError::Http {
                    status: StatusCode::GATEWAY_TIMEOUT,
                    code: "UPSTREAM_TIMEOUT",
                    message: "The hosting API timed out.".into(),
                },
                RepoProviderError::Server(_)
                | RepoProviderError::HttpStatus(_)
                | RepoProviderError::Network(_) => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "GIT_REMOTE_ERROR",
                    message: format!("Remote error while talking to the hosting API: {p}"),
                },
                RepoProviderError::InvalidResponse(msg) => AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "INVALID_PROVIDER_RESPONSE",
                    message: msg,
                },
            },
        }
    }
}

/// Convert `AiLlmError` to `AppError::Http`. Config problems are server
/// misconfiguration; everything else is an upstream LLM failure.
impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        match err {
            AiLlmError::Config(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "LLM_CONFIG_ERROR",
                message: e.to_string(),
            },
            other => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "LLM_ERROR",
                message: other.to_string(),
            },
        }
    }
}
