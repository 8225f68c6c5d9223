//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! Every repository extends the generic `Repository<T, ID>` contract from
//! the foundation module and adds only its natural-key lookups.
//!
//! - `ProfileRepository` - Profiles, plus lookup by email
//! - `CategoryRepository` - Categories
//! - `TutorialRepository` - Tutorials with their assets, plus lookup by category

mod category_repository;
mod profile_repository;
mod tutorial_repository;

pub use category_repository::CategoryRepository;
pub use profile_repository::ProfileRepository;
pub use tutorial_repository::TutorialRepository;
