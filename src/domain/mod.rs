//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, repository contract)
//! - `profiles` - Profile aggregate and its value objects
//! - `publishing` - Categories, tutorials and their assets

pub mod foundation;
pub mod profiles;
pub mod publishing;
