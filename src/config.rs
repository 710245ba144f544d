use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default base URL for GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of releases requested per repository
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Largest page size the GitHub API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Timeout for a single release listing request in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub github: GitHubConfig,
    /// Abort the whole run on the first repository that cannot be fetched
    pub fail_fast: bool,
    /// Ignore pre-release versions when selecting
    pub stable_only: bool,
}

/// GitHub Releases API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub api_url: String,
    pub per_page: u32,
    pub token: Option<String>,
    pub timeout_ms: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, using defaults for missing fields
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut config: Config = serde_json::from_str(content)?;
        config.github.per_page = config.github.per_page.clamp(1, MAX_PER_PAGE);
        Ok(config)
    }
}

/// Returns the path to the data directory for release-lines.
/// Uses $XDG_DATA_HOME/release-lines if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/release-lines,
/// or ./release-lines if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("release-lines.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("release-lines")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = Config::from_json(r#"{ "github": { "perPage": 50 } }"#).unwrap();

        assert_eq!(result.github.per_page, 50);
        assert_eq!(result.github.api_url, DEFAULT_API_URL);
        assert_eq!(result.github.token, None);
        assert!(!result.fail_fast);
        assert!(!result.stable_only);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = Config::from_json(
            r#"{
                "github": {
                    "apiUrl": "https://github.example.com/api/v3",
                    "perPage": 30,
                    "token": "secret",
                    "timeoutMs": 5000
                },
                "failFast": true,
                "stableOnly": true
            }"#,
        )
        .unwrap();

        assert_eq!(
            result,
            Config {
                github: GitHubConfig {
                    api_url: "https://github.example.com/api/v3".to_string(),
                    per_page: 30,
                    token: Some("secret".to_string()),
                    timeout_ms: 5000,
                },
                fail_fast: true,
                stable_only: true,
            }
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(50, 50)]
    #[case(250, MAX_PER_PAGE)]
    #[case(100_000, MAX_PER_PAGE)]
    fn config_clamps_page_size_to_api_limit(#[case] per_page: u32, #[case] expected: u32) {
        let content = format!(r#"{{ "github": {{ "perPage": {} }} }}"#, per_page);

        let result = Config::from_json(&content).unwrap();

        assert_eq!(result.github.per_page, expected);
    }

    #[test]
    fn load_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "failFast": true }"#).unwrap();

        let result = Config::load(&path).unwrap();

        assert!(result.fail_fast);
    }

    #[test]
    fn load_returns_read_error_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = Config::load(&path);

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_returns_parse_error_for_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Config::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/release-lines"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/release-lines"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./release-lines"));
    }
}
