//! Registry trait for fetching release tags from a release-hosting service

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ReleaseTags;

/// Trait for fetching the releases of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the release tags of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository in `owner/repo` form (e.g., "rust-lang/rust")
    ///
    /// # Returns
    /// * `Ok(ReleaseTags)` - Tag names, ordered from newest to oldest
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_release_tags(&self, repository: &str) -> Result<ReleaseTags, RegistryError>;
}
