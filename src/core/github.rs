//! GitHub repository metadata client.

use serde::Deserialize;

use crate::config::StarsConfig;
use crate::core::error::FetchError;
use crate::core::stars::StarFetcher;
use crate::utils::fetch_text;

/// The subset of `GET /repos/{owner}/{name}` the badges need.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub stargazers_count: Option<u64>,
}

impl RepoMetadata {
    /// Star count, 0 when the API omits it.
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }
}

/// Parse a repository metadata body into a star count.
pub fn parse_stars(body: &str) -> Result<u64, FetchError> {
    serde_json::from_str::<RepoMetadata>(body)
        .map(|meta| meta.stars())
        .map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Unauthenticated client for the public GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    api_base_url: String,
}

impl GitHubClient {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StarsConfig) -> Self {
        Self::new(config.api_base_url.as_str())
    }

    /// Metadata URL for `owner/name`. The identifier is used verbatim.
    pub fn repo_url(&self, repo: &str) -> String {
        format!("{}/repos/{}", self.api_base_url, repo)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::from_config(&StarsConfig::default())
    }
}

impl StarFetcher for GitHubClient {
    async fn stargazers(&self, repo: &str) -> Result<u64, FetchError> {
        let body = fetch_text(&self.repo_url(repo)).await?;
        parse_stars(&body)
    }
}
