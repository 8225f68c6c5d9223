//! GetAllCategoriesHandler - Query handler listing every category.

use std::sync::Arc;
use tracing::debug;

use crate::domain::publishing::{Category, GetAllCategoriesQuery, PublishingError};
use crate::ports::CategoryRepository;

pub struct GetAllCategoriesHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl GetAllCategoriesHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        _query: GetAllCategoriesQuery,
    ) -> Result<Vec<Category>, PublishingError> {
        let categories = self.repository.find_all().await?;
        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }
}
