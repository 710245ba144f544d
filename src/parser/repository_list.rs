//! Parser for repository list files
//!
//! Each record is `owner/repo,min_version`:
//!
//! ```text
//! repository,min_version
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,v2.2.0
//! ```
//!
//! The `repository,min_version` header, blank lines, and `#` comments are skipped.

use tracing::debug;

use crate::parser::error::ParseError;
use crate::parser::types::RepositoryRequest;
use crate::version::semver::parse_floor;

const HEADER_REPOSITORY: &str = "repository";
const HEADER_MIN_VERSION: &str = "min_version";

/// Parse the content of a repository list file
///
/// Fails on the first malformed record.
pub fn parse_repository_list(content: &str) -> Result<Vec<RepositoryRequest>, ParseError> {
    let mut requests = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split(',').map(str::trim);
        let (Some(repository), Some(min_version)) = (fields.next(), fields.next()) else {
            return Err(ParseError::MissingField { line });
        };

        if repository == HEADER_REPOSITORY && min_version == HEADER_MIN_VERSION {
            debug!("Skipping header on line {}", line);
            continue;
        }

        requests.push(parse_record(line, repository, min_version)?);
    }

    Ok(requests)
}

fn parse_record(
    line: usize,
    repository: &str,
    min_version: &str,
) -> Result<RepositoryRequest, ParseError> {
    let (owner, repo) = repository
        .split_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
        .ok_or_else(|| ParseError::InvalidRepository {
            line,
            value: repository.to_string(),
        })?;

    if min_version.is_empty() {
        return Err(ParseError::MissingField { line });
    }

    let min_version =
        parse_floor(min_version).map_err(|source| ParseError::MalformedVersion { line, source })?;

    Ok(RepositoryRequest {
        owner: owner.to_string(),
        repo: repo.to_string(),
        min_version,
        line,
    })
}
