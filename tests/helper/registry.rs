//! Registry test utilities

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use release_lines::version::error::RegistryError;
use release_lines::version::registry::Registry;
use release_lines::version::types::ReleaseTags;

/// In-memory registry serving fixed release tags
pub struct MockRegistry {
    releases: HashMap<String, Vec<String>>,
    requested: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            releases: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_releases(mut self, repository: &str, tags: Vec<&str>) -> Self {
        self.releases.insert(
            repository.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Repositories requested so far, in call order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_release_tags(&self, repository: &str) -> Result<ReleaseTags, RegistryError> {
        self.requested.lock().unwrap().push(repository.to_string());
        match self.releases.get(repository) {
            Some(tags) => Ok(ReleaseTags::new(tags.clone())),
            None => Err(RegistryError::NotFound(repository.to_string())),
        }
    }
}

/// Write `content` to a repository list file inside a fresh temp dir
pub fn create_input_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("repositories.csv");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
