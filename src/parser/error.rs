use crate::version::error::VersionError;

/// Error type for parsing the repository list
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Line does not contain both a repository and a minimum version
    #[error("line {line}: expected `owner/repo,min_version`")]
    MissingField { line: usize },

    /// Repository is not in `owner/repo` form
    #[error("line {line}: invalid repository {value:?}, expected `owner/repo`")]
    InvalidRepository { line: usize, value: String },

    /// Minimum version is not a semantic version
    #[error("line {line}: {source}")]
    MalformedVersion {
        line: usize,
        #[source]
        source: VersionError,
    },
}
