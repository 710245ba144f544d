//! Report the newest release of every minor version line of GitHub repositories
//!
//! # Modules
//!
//! - [`config`]: Configuration file and data directory handling
//! - [`log`]: Tracing subscriber setup
//! - [`parser`]: Repository list parsing
//! - [`report`]: Per-repository output formatting
//! - [`runner`]: Sequential lookup of every listed repository
//! - [`version`]: Release fetching, tag parsing, and version line selection

pub mod config;
pub mod log;
pub mod parser;
pub mod report;
pub mod runner;
pub mod version;
