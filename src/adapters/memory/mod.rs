//! In-memory repository adapters.
//!
//! Useful for development and tests. Identities are allocated sequentially
//! from 1, mirroring a database sequence. Data is lost on restart.

mod category_repository;
mod profile_repository;
mod tutorial_repository;

pub use category_repository::InMemoryCategoryRepository;
pub use profile_repository::InMemoryProfileRepository;
pub use tutorial_repository::InMemoryTutorialRepository;

use std::sync::atomic::{AtomicI64, Ordering};

/// Sequential id allocator shared by the in-memory repositories.
#[derive(Debug, Default)]
struct Sequence(AtomicI64);

impl Sequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}
