//! Common types for parsers

use std::fmt;

use semver::Version;

/// A repository to look up together with its minimum version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRequest {
    /// Repository owner (e.g., "kubernetes")
    pub owner: String,
    /// Repository name (e.g., "kubernetes")
    pub repo: String,
    /// Only releases strictly newer than this version are reported
    pub min_version: Version,
    /// Line number in the source file (1-based)
    pub line: usize,
}

impl RepositoryRequest {
    /// Returns the repository in `owner/repo` form
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RepositoryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
