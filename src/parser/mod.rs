//! Parser layer
//! - error.rs: Error type for input parsing
//! - types.rs: Common types (RepositoryRequest)
//! - repository_list.rs: `owner/repo,min_version` list parser

pub mod error;
pub mod repository_list;
pub mod types;

pub use error::ParseError;
pub use repository_list::parse_repository_list;
pub use types::RepositoryRequest;
