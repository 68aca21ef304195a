//! GitHub provider (REST v3) for repository listings, file content and
//! commit history.
//!
//! Endpoints used (as of 2025):
//!   * GET /repos/{owner}/{repo}
//!   * GET /repos/{owner}/{repo}/contents/{path}
//!   * GET /repos/{owner}/{repo}/commits?per_page=100&page={n}

use crate::errors::{RepoContextError, RepoContextResult};
use crate::repo_providers::types::*;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::VecDeque;
use tracing::{debug, warn};

const COMMITS_PAGE_SIZE: usize = 100;

/// GitHub HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct GitHubRepoClient {
    http: Client,
    base_api: String, // "https://api.github.com"
    token: String,    // "Bearer <token>"
}

impl GitHubRepoClient {
    /// Constructs a GitHub client with a shared HTTP instance and auth token.
    pub fn new(http: Client, base_api: String, token: String) -> Self {
        debug!("Creating GitHubRepoClient with base_api={}", base_api);
        Self {
            http,
            base_api,
            token,
        }
    }

    /// Fetches repository metadata (name, description, default branch).
    pub async fn get_overview(&self, id: &RepoId) -> RepoContextResult<RepoOverview> {
        let url = format!("{}/repos/{}/{}", self.base_api, id.owner, id.name);
        debug!("GitHub get_overview: {}", url);

        let resp: GitHubRepo = self
            .http
            .get(url)
            .header("Authorization", &self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(RepoOverview {
            full_name: resp.full_name,
            description: resp.description,
            default_branch: resp.default_branch,
        })
    }

    /// Lists all leaf files of the repository.
    ///
    /// Directories are walked with an explicit work queue over the contents
    /// endpoint, so arbitrarily nested trees never hit a recursion limit.
    pub async fn list_files(&self, id: &RepoId) -> RepoContextResult<Vec<RepoTreeEntry>> {
        let mut files = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(String::new());

        while let Some(dir) = queue.pop_front() {
            let url = self.contents_url(id, &dir);
            debug!("GitHub list_files: {}", url);

            let entries: Vec<GitHubContentEntry> = self
                .http
                .get(url)
                .header("Authorization", &self.token)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            for e in entries {
                match e.kind.as_str() {
                    "file" => files.push(RepoTreeEntry {
                        path: e.path,
                        name: e.name,
                        kind: EntryKind::File,
                        size: e.size.unwrap_or(0),
                    }),
                    "dir" => queue.push_back(e.path),
                    other => {
                        // Symlinks and submodules are not fetchable as text.
                        warn!(path = %e.path, kind = %other, "skipping unsupported entry");
                    }
                }
            }
        }

        Ok(files)
    }

    /// Fetches a file's text content at the default branch.
    ///
    /// Non-UTF-8 content is a distinguishable decode error, not a panic.
    pub async fn get_file_text(&self, id: &RepoId, path: &str) -> RepoContextResult<String> {
        let url = self.contents_url(id, path);
        debug!("GitHub get_file_text: {}", url);

        let bytes = self
            .http
            .get(url)
            .header("Authorization", &self.token)
            .header("Accept", "application/vnd.github.v3.raw")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        String::from_utf8(bytes.to_vec())
            .map_err(|e| RepoContextError::Decode(format!("{path}: {e}")))
    }

    /// Fetches all commit timestamps plus the total commit count.
    ///
    /// Pages through the commits endpoint until a short page is returned.
    /// Commits without author metadata still count toward the total.
    pub async fn list_commit_timestamps(
        &self,
        id: &RepoId,
    ) -> RepoContextResult<(Vec<DateTime<Utc>>, u64)> {
        let url = format!("{}/repos/{}/{}/commits", self.base_api, id.owner, id.name);
        let mut timestamps = Vec::new();
        let mut total: u64 = 0;
        let mut page: u32 = 1;

        loop {
            debug!("GitHub list_commit_timestamps: {} page={}", url, page);

            let batch: Vec<GitHubCommit> = self
                .http
                .get(&url)
                .query(&[
                    ("per_page", COMMITS_PAGE_SIZE.to_string()),
                    ("page", page.to_string()),
                ])
                .header("Authorization", &self.token)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            let fetched = batch.len();
            total += fetched as u64;

            for c in batch {
                match c.commit.author {
                    Some(a) => timestamps.push(a.date),
                    None => debug!(sha = %c.sha, "commit without author date"),
                }
            }

            if fetched < COMMITS_PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok((timestamps, total))
    }

    /// Builds a contents URL, percent-encoding each path segment while
    /// keeping the segment separators intact.
    fn contents_url(&self, id: &RepoId, path: &str) -> String {
        let encoded: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|seg| urlencoding::encode(seg).into_owned())
            .collect();
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_api,
            id.owner,
            id.name,
            encoded.join("/")
        )
    }
}

/// GitHub repository response (subset).
#[derive(Debug, Deserialize)]
struct GitHubRepo {
    full_name: String,
    description: Option<String>,
    default_branch: String,
}

/// GitHub contents entry (subset).
#[derive(Debug, Deserialize)]
struct GitHubContentEntry {
    name: String,
    path: String,
    #[serde(default)]
    size: Option<u64>,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct GitHubCommit {
    sha: String,
    commit: GitHubCommitInner,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitInner {
    author: Option<GitHubCommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitAuthor {
    date: DateTime<Utc>,
}
