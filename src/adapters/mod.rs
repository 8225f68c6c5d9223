//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - In-memory repositories for development and tests
//! - `postgres` - PostgreSQL repositories (sqlx)

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCategoryRepository, InMemoryProfileRepository, InMemoryTutorialRepository};
pub use postgres::{PostgresCategoryRepository, PostgresProfileRepository, PostgresTutorialRepository};
