//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types, the command metadata and
//! the generic repository contract shared by every bounded context.

mod command;
mod errors;
mod ids;
mod repository;
mod timestamp;

pub use command::CommandMetadata;
pub(crate) use errors::require_non_empty;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CategoryId, ProfileId, TutorialId};
pub use repository::Repository;
pub use timestamp::Timestamp;
