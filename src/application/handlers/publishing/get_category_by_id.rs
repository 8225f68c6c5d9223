//! GetCategoryByIdHandler - Query handler for a single category.

use std::sync::Arc;
use tracing::debug;

use crate::domain::publishing::{Category, GetCategoryByIdQuery, PublishingError};
use crate::ports::CategoryRepository;

pub struct GetCategoryByIdHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryByIdHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetCategoryByIdQuery,
    ) -> Result<Option<Category>, PublishingError> {
        debug!(category_id = %query.category_id, "Fetching category");
        Ok(self.repository.find_by_id(query.category_id).await?)
    }
}
