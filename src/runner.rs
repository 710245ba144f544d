//! Sequential lookup of every listed repository
//!
//! For each request: fetch release tags, parse them, select the newest release
//! of each version line above the floor, and write one report line.

use std::io::Write;
use std::path::{Path, PathBuf};

use semver::Version;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::parser::error::ParseError;
use crate::parser::repository_list::parse_repository_list;
use crate::parser::types::RepositoryRequest;
use crate::report::RepositoryReport;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::selector::select_latest;
use crate::version::semver::parse_tags;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read input file {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input file: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to fetch releases for {repository}: {source}")]
    Registry {
        repository: String,
        #[source]
        source: RegistryError,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Behaviour switches for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Abort on the first repository that cannot be fetched
    pub fail_fast: bool,
    /// Drop pre-release versions before selecting
    pub stable_only: bool,
}

impl From<&Config> for RunOptions {
    fn from(config: &Config) -> Self {
        Self {
            fail_fast: config.fail_fast,
            stable_only: config.stable_only,
        }
    }
}

/// A repository whose releases could not be fetched
#[derive(Debug)]
pub struct RepositoryFailure {
    pub repository: String,
    pub error: RegistryError,
}

/// Outcome of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of report lines written
    pub reported: usize,
    /// Repositories skipped because their releases could not be fetched
    pub failures: Vec<RepositoryFailure>,
}

impl RunSummary {
    /// Returns true if every repository was reported
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Look up a single repository and select its newest release per version line
pub async fn lookup_repository(
    registry: &dyn Registry,
    request: &RepositoryRequest,
    stable_only: bool,
) -> Result<RepositoryReport, RegistryError> {
    let repository = request.full_name();
    let release_tags = registry.fetch_release_tags(&repository).await?;

    let mut candidates = parse_tags(&release_tags.tags);
    if stable_only {
        candidates.retain(|v: &Version| v.pre.is_empty());
    }

    let versions = select_latest(candidates, &request.min_version);
    info!(
        "Selected {} of {} releases for {} above {}",
        versions.len(),
        release_tags.len(),
        repository,
        request.min_version
    );

    Ok(RepositoryReport::new(repository, versions))
}

/// Report every request in order, writing one line per repository to `out`
///
/// Fetch failures are collected in the summary and the run continues, unless
/// `fail_fast` is set. Write failures always abort.
pub async fn run<W: Write>(
    requests: &[RepositoryRequest],
    registry: &dyn Registry,
    out: &mut W,
    options: RunOptions,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();

    for request in requests {
        match lookup_repository(registry, request, options.stable_only).await {
            Ok(report) => {
                writeln!(out, "{}", report)?;
                summary.reported += 1;
            }
            Err(e) if options.fail_fast => {
                error!("Aborting run at {} (line {}): {}", request, request.line, e);
                return Err(RunError::Registry {
                    repository: request.full_name(),
                    source: e,
                });
            }
            Err(e) => {
                error!(
                    "Failed to fetch releases for {} (line {}): {}",
                    request, request.line, e
                );
                summary.failures.push(RepositoryFailure {
                    repository: request.full_name(),
                    error: e,
                });
            }
        }
    }

    out.flush()?;

    if !summary.is_success() {
        warn!(
            "{} of {} repositories could not be fetched",
            summary.failures.len(),
            requests.len()
        );
    }

    Ok(summary)
}

/// Read and parse a repository list file, then run every request in it
pub async fn run_file<W: Write>(
    path: &Path,
    registry: &dyn Registry,
    out: &mut W,
    options: RunOptions,
) -> Result<RunSummary, RunError> {
    let content = std::fs::read_to_string(path).map_err(|source| RunError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let requests = parse_repository_list(&content)?;
    info!("Loaded {} repositories from {:?}", requests.len(), path);

    run(&requests, registry, out, options).await
}
