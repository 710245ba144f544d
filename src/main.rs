use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use release_lines::config::{self, Config, MAX_PER_PAGE};
use release_lines::runner::{self, RunOptions};
use release_lines::version::registries::GitHubRegistry;

#[derive(Parser)]
#[command(name = "release-lines")]
#[command(
    version,
    about = "Report the newest release of every minor version line above a minimum version"
)]
struct Cli {
    /// File with one `owner/repo,min_version` record per line
    input: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the GitHub API
    #[arg(long)]
    api_url: Option<String>,

    /// Number of releases fetched per repository
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    per_page: Option<u32>,

    /// GitHub token used to raise the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Ignore pre-release versions
    #[arg(long)]
    stable_only: bool,

    /// Stop at the first repository that cannot be fetched
    #[arg(long)]
    fail_fast: bool,

    /// Log file (defaults to the release-lines data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the configuration file, if any, and apply command-line overrides
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(api_url) = &self.api_url {
            config.github.api_url = api_url.clone();
        }
        if let Some(per_page) = self.per_page {
            config.github.per_page = per_page;
        }
        if let Some(token) = &self.token {
            config.github.token = Some(token.clone());
        }
        config.stable_only |= self.stable_only;
        config.fail_fast |= self.fail_fast;

        Ok(config)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(config::log_path);
    release_lines::log::init(&log_path)?;

    let config = cli.resolve_config()?;
    let registry = GitHubRegistry::new(&config.github)?;

    info!("Starting release-lines for {:?}", cli.input);

    let summary = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(runner::run_file(
            &cli.input,
            &registry,
            &mut std::io::stdout().lock(),
            RunOptions::from(&config),
        ))?;

    if summary.is_success() {
        return Ok(ExitCode::SUCCESS);
    }

    let mut stderr = std::io::stderr().lock();
    for failure in &summary.failures {
        writeln!(stderr, "{}: {}", failure.repository, failure.error)?;
    }
    Ok(ExitCode::FAILURE)
}
