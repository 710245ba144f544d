//! Common types for release lookup

/// Release tags published for a repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseTags {
    /// Raw tag names, ordered from newest to oldest as returned by the registry
    pub tags: Vec<String>,
}

impl ReleaseTags {
    /// Creates a new ReleaseTags with the given tags
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    /// Returns the number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the repository has no releases
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_tags() {
        let tags = ReleaseTags::new(vec!["v2.0.0".to_string(), "v1.0.0".to_string()]);

        assert_eq!(tags.len(), 2);
        assert!(!tags.is_empty());
    }

    #[test]
    fn default_has_no_releases() {
        assert!(ReleaseTags::default().is_empty());
    }
}
