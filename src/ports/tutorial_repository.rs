//! TutorialRepository port.
//!
//! A tutorial is stored together with its assets; `update` persists assets
//! added since the tutorial was loaded.

use async_trait::async_trait;

use crate::domain::{
    foundation::{CategoryId, DomainError, Repository, TutorialId},
    publishing::Tutorial,
};

/// Repository for managing tutorials.
#[async_trait]
pub trait TutorialRepository: Repository<Tutorial, TutorialId> {
    /// Every tutorial in the given category. Unknown ids yield an empty list.
    async fn find_by_category_id(&self, category_id: CategoryId)
        -> Result<Vec<Tutorial>, DomainError>;
}
