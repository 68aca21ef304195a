//! Provider-agnostic data model for repository listings and commit history.

use crate::errors::{RepoContextError, RepoContextResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Supported hosting providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProviderKind {
    GitHub,
}

/// A unique reference to a hosted repository.
///
/// Parsed from the canonical `owner/name` form typed by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parses `"owner/name"` or returns a validation error.
    pub fn parse(input: &str) -> RepoContextResult<Self> {
        let mut parts = input.split('/');
        let owner = parts.next().unwrap_or("").trim();
        let name = parts.next().unwrap_or("").trim();

        if owner.is_empty() || name.is_empty() || parts.next().is_some() {
            return Err(RepoContextError::Validation(format!(
                "invalid repository id '{}', expected 'owner/name'",
                input
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl Display for RepoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Kind of a directory entry in a repository listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One leaf entry of the recursive file listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoTreeEntry {
    /// Repo-relative path, e.g. `src/app/main.py`.
    pub path: String,
    /// Bare file name, e.g. `main.py`.
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes as reported by the provider.
    pub size: u64,
}

/// High-level repository metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOverview {
    pub full_name: String,
    pub description: Option<String>,
    pub default_branch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_name() {
        let id = RepoId::parse("rust-lang/cargo").unwrap();
        assert_eq!(id.owner, "rust-lang");
        assert_eq!(id.name, "cargo");
        assert_eq!(id.to_string(), "rust-lang/cargo");
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(RepoId::parse("").is_err());
        assert!(RepoId::parse("onlyowner").is_err());
        assert!(RepoId::parse("a/b/c").is_err());
        assert!(RepoId::parse("/name").is_err());
        assert!(RepoId::parse("owner/").is_err());
    }

    #[test]
    fn trims_whitespace_around_segments() {
        let id = RepoId::parse(" owner / repo ").unwrap();
        assert_eq!(id.owner, "owner");
        assert_eq!(id.name, "repo");
    }
}
