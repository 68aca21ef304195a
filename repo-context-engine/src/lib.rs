//! Hosting-API client for repository structure and history.
//!
//! Exposes a provider facade (currently GitHub) for listing a repository's
//! files, fetching file text and retrieving commit timestamps, plus the
//! pure commit-activity aggregation used by the chart.

pub mod activity;
pub mod errors;
pub mod repo_providers;
