//! Selection of the newest release of every version line
//!
//! Given the releases of one repository and a floor version, keep the highest
//! release of each `(major, minor)` line that is strictly newer than the floor,
//! ordered from newest to oldest.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use semver::Version;

use crate::version::semver::cmp_precedence;

/// All releases sharing the same `(major, minor)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionLine {
    pub major: u64,
    pub minor: u64,
}

impl VersionLine {
    /// Returns the line the given version belongs to
    pub fn of(version: &Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
        }
    }
}

/// Select the highest version of each version line that is newer than `floor`
///
/// Candidates equal to the floor are excluded. Build metadata is ignored when
/// comparing against the floor; within a line it only breaks ties, so the
/// result does not depend on the order of `candidates`.
///
/// Returns the selected versions sorted from newest to oldest.
pub fn select_latest<I>(candidates: I, floor: &Version) -> Vec<Version>
where
    I: IntoIterator<Item = Version>,
{
    let mut best: HashMap<VersionLine, Version> = HashMap::new();

    for candidate in candidates {
        if cmp_precedence(&candidate, floor) != Ordering::Greater {
            continue;
        }

        match best.entry(VersionLine::of(&candidate)) {
            Entry::Occupied(mut entry) => {
                if candidate > *entry.get() {
                    entry.insert(candidate);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
        }
    }

    let mut selected: Vec<Version> = best.into_values().collect();
    selected.sort_unstable_by(|a, b| b.cmp(a));
    selected
}
