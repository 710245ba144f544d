//! Registry implementations for fetching release tags

pub mod github;

pub use github::GitHubRegistry;
