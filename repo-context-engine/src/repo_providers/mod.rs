//! Provider facade without async-trait or dynamic trait objects.
//!
//! This module exposes an enum `ProviderClient` that wraps concrete
//! implementations per hosting provider and gives the application a
//! uniform interface for:
//!   * repository metadata
//!   * recursive file listing and raw content fetch
//!   * commit timestamp retrieval.

pub mod types;
pub use types::*;

pub mod github;

use crate::errors::RepoContextResult;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Runtime configuration for any provider client.
///
/// Usually injected from environment or higher-level application settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// API base, e.g. "https://api.github.com".
    pub base_api: String,
    /// Access token for the provider (PAT or app token), without scheme.
    pub token: String,
}

/// Concrete provider client with enum dispatch.
///
/// This type is the main entry point for all hosting-API interactions.
#[derive(Debug, Clone)]
pub enum ProviderClient {
    GitHub(github::GitHubRepoClient),
}

impl ProviderClient {
    /// Constructs a concrete provider client from generic configuration.
    ///
    /// The underlying HTTP client is shared and configured with a stable
    /// user agent so that providers can identify the integration.
    pub fn from_config(cfg: ProviderConfig) -> RepoContextResult<Self> {
        debug!(
            "Initializing provider client: kind={:?}, base_api={}",
            cfg.kind, cfg.base_api
        );

        let client = reqwest::Client::builder()
            .user_agent("repo-context-engine/0.1")
            .build()?;

        let client = match cfg.kind {
            ProviderKind::GitHub => ProviderClient::GitHub(github::GitHubRepoClient::new(
                client,
                cfg.base_api,
                format!("Bearer {}", cfg.token),
            )),
        };

        Ok(client)
    }

    /// Fetches repository metadata (name, description, default branch).
    pub async fn get_overview(&self, id: &RepoId) -> RepoContextResult<RepoOverview> {
        debug!("Fetching overview: repo={}", id);
        match self {
            Self::GitHub(c) => c.get_overview(id).await,
        }
    }

    /// Lists all leaf files of the repository via iterative traversal.
    pub async fn list_files(&self, id: &RepoId) -> RepoContextResult<Vec<RepoTreeEntry>> {
        debug!("Listing files: repo={}", id);
        match self {
            Self::GitHub(c) => c.list_files(id).await,
        }
    }

    /// Fetches one file's text content.
    pub async fn get_file_text(&self, id: &RepoId, path: &str) -> RepoContextResult<String> {
        debug!("Fetching file text: repo={}, path={}", id, path);
        match self {
            Self::GitHub(c) => c.get_file_text(id, path).await,
        }
    }

    /// Fetches all commit timestamps plus the total commit count.
    pub async fn list_commit_timestamps(
        &self,
        id: &RepoId,
    ) -> RepoContextResult<(Vec<DateTime<Utc>>, u64)> {
        debug!("Listing commit timestamps: repo={}", id);
        match self {
            Self::GitHub(c) => c.list_commit_timestamps(id).await,
        }
    }
}
