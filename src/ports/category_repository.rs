//! CategoryRepository port.

use async_trait::async_trait;

use crate::domain::{
    foundation::{CategoryId, Repository},
    publishing::Category,
};

/// Repository for managing categories.
///
/// Categories have no natural-key lookups beyond the base contract.
#[async_trait]
pub trait CategoryRepository: Repository<Category, CategoryId> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn CategoryRepository) {}
}
