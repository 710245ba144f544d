//! GitHub Releases API registry implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GitHubConfig;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::ReleaseTags;

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Registry implementation for GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    per_page: u32,
    token: Option<String>,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry from configuration
    pub fn new(config: &GitHubConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("release-lines/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page,
            token: config.token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_release_tags(&self, repository: &str) -> Result<ReleaseTags, RegistryError> {
        let url = format!(
            "{}/repos/{}/releases?per_page={}",
            self.base_url, repository, self.per_page
        );
        debug!("Fetching releases: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted)
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let tags = releases.into_iter().map(|r| r.tag_name).collect();

        Ok(ReleaseTags::new(tags))
    }
}
