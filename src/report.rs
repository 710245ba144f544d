//! Rendering of per-repository results

use std::fmt;

use semver::Version;

/// Newest release of every version line above the floor for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReport {
    /// Repository in `owner/repo` form
    pub repository: String,
    /// Selected versions, newest first
    pub versions: Vec<Version>,
}

impl RepositoryReport {
    pub fn new(repository: impl Into<String>, versions: Vec<Version>) -> Self {
        Self {
            repository: repository.into(),
            versions,
        }
    }
}

/// Formats as `latest versions of OWNER/REPO: [1.10.1 1.9.6 1.8.11]`
impl fmt::Display for RepositoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "latest versions of {}: [", self.repository)?;
        for (i, version) in self.versions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", version)?;
        }
        f.write_str("]")
    }
}
