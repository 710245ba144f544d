//! Version layer: fetching releases and selecting the newest of each line
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Semver    │────▶│  Selector   │
//! │ (fetch tags)│     │ (tag parse) │     │ (per line)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │  (github)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching release tags from remote sources
//! - [`registries`]: Concrete registry implementations (GitHub Releases)
//! - [`semver`]: Tag normalization and version parsing
//! - [`selector`]: Newest release per `(major, minor)` line above a floor
//! - [`error`]: Error types for version parsing and registry operations
//! - [`types`]: Common types like `ReleaseTags`

pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
pub mod types;
