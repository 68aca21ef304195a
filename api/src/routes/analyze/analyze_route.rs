//! POST /analyze — the full analysis pipeline for one repository.
//!
//! Strictly sequential per request: overview → file listing → snippet
//! extraction → graph assembly → summary call → commit history → response.
//! Nothing is retried; repository failures abort the request, while a
//! summary failure still returns the graph and commit data (see
//! [`AnalyzeResponse::summary_error`]).

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument, warn};

use ai_llm_service::{prompt::compile_source_prompt, services::gemini_service::GeminiService};
use codegraph_prep::{extract::snippets::is_source_file, run::run_structure_pass};
use repo_context_engine::{
    activity::commit_activity,
    repo_providers::{ProviderClient, ProviderConfig, ProviderKind, RepoId},
};

use crate::{
    core::{
        app_state::AppState,
        http::response_envelope::{ApiErrorDetail, ApiResponse},
    },
    error_handler::{AppError, AppResult},
    routes::analyze::{analyze_request::AnalyzeRequest, analyze_response::AnalyzeResponse},
};

/// Handler: POST /analyze
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/analyze \
///   -H 'content-type: application/json' \
///   -d '{"repository":"rust-lang/cargo"}'
/// ```
#[instrument(name = "analyze_route", skip(state, body))]
pub async fn analyze_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    let repo = match RepoId::parse(&body.repository) {
        Ok(r) => r,
        Err(err) => {
            let details = vec![ApiErrorDetail {
                path: Some("repository".into()),
                hint: Some("Use the 'owner/name' form, e.g. 'rust-lang/cargo'.".into()),
            }];
            return ApiResponse::<()>::error("BAD_REQUEST", err.to_string(), details)
                .into_response_with_status(StatusCode::BAD_REQUEST);
        }
    };

    info!(repo = %repo, "starting repository analysis");

    match run_analysis(&state, &repo).await {
        Ok(report) => ApiResponse::success(report).into_response_with_status(StatusCode::OK),
        Err(err) => err.into_response(),
    }
}

/// Runs the sequential analysis pipeline for one repository.
async fn run_analysis(state: &AppState, repo: &RepoId) -> AppResult<AnalyzeResponse> {
    let provider = ProviderClient::from_config(ProviderConfig {
        kind: ProviderKind::GitHub,
        base_api: state.github_api_base.clone(),
        token: state.github_token.clone(),
    })?;

    let overview = provider.get_overview(repo).await?;
    let entries = provider.list_files(repo).await?;
    debug!(files = entries.len(), "repository listing fetched");

    // Only allow-listed files are worth fetching; the rest still counted in
    // the listing above.
    let mut raw_files = Vec::with_capacity(entries.len());
    for entry in &entries {
        if !is_source_file(&entry.name) {
            continue;
        }
        let content = provider.get_file_text(repo, &entry.path).await?;
        raw_files.push((entry.path.clone(), content));
    }

    let artifacts = run_structure_pass(raw_files).map_err(|e| AppError::Http {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "GRAPH_ERROR",
        message: e.to_string(),
    })?;

    let prompt = compile_source_prompt(
        artifacts
            .records
            .iter()
            .map(|r| (r.name.as_str(), r.content.as_str())),
    );

    // A summary failure does not abort the request: the graph and commit
    // data are still rendered, with the failure text surfaced alongside.
    let (summary, summary_error) = match GeminiService::new(state.llm_config.clone()) {
        Ok(svc) => match svc.generate(&prompt).await {
            Ok(text) => (Some(text), None),
            Err(err) => {
                warn!(error = %err, "summary generation failed");
                (None, Some(err.to_string()))
            }
        },
        Err(err) => {
            warn!(error = %err, "summary service init failed");
            (None, Some(err.to_string()))
        }
    };

    let (timestamps, commit_count) = provider.list_commit_timestamps(repo).await?;
    let activity = commit_activity(&timestamps);

    info!(
        repo = %repo,
        nodes = artifacts.nodes.len(),
        edges = artifacts.edges.len(),
        commits = commit_count,
        "analysis finished"
    );

    Ok(AnalyzeResponse {
        repository: overview.full_name,
        description: overview.description,
        commit_count,
        nodes: artifacts.nodes,
        edges: artifacts.edges,
        summary,
        summary_error,
        commit_activity: activity,
    })
}
