use std::cmp::Ordering;

use semver::Version;
use tracing::warn;

use crate::version::error::VersionError;

/// Strip any leading non-numeric prefix from a release tag.
///
/// Examples:
/// - "v1.2.3" -> "1.2.3"
/// - "release-2.0.0" -> "2.0.0"
/// - "1.2.3" -> "1.2.3"
pub fn normalize_tag(tag: &str) -> &str {
    tag.trim().trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// Does NOT strip 'v' prefix (use `normalize_tag` first if needed).
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse a release tag such as "v1.2.3" into a version.
///
/// The tag needs at least `major.minor` once its prefix is stripped, so date
/// or build-number tags ("nightly-20240101", "build-7") are rejected.
pub fn parse_tag(tag: &str) -> Result<Version, VersionError> {
    let normalized = normalize_tag(tag);
    let core = normalized.split(['-', '+']).next().unwrap_or_default();
    if core.split('.').count() < 2 {
        return Err(VersionError::MalformedVersion(tag.to_string()));
    }

    parse_version(normalized).ok_or_else(|| VersionError::MalformedVersion(tag.to_string()))
}

/// Parse a minimum version, also accepting a bare major such as "2" or "v2".
pub fn parse_floor(version: &str) -> Result<Version, VersionError> {
    parse_version(normalize_tag(version))
        .ok_or_else(|| VersionError::MalformedVersion(version.to_string()))
}

/// Parse every tag that looks like a version, skipping the rest.
///
/// Repositories often publish releases under non-version tags ("nightly",
/// "latest"), so those are logged and ignored instead of failing the lookup.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Vec<Version> {
    tags.iter()
        .filter_map(|tag| {
            parse_tag(tag.as_ref())
                .inspect_err(|e| warn!("Skipping release tag: {}", e))
                .ok()
        })
        .collect()
}

/// Compare two versions by semver precedence, ignoring build metadata.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}
