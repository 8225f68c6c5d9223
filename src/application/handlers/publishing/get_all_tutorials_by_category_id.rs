//! GetAllTutorialsByCategoryIdHandler - Query handler listing a category's tutorials.

use std::sync::Arc;
use tracing::debug;

use crate::domain::publishing::{GetAllTutorialsByCategoryIdQuery, PublishingError, Tutorial};
use crate::ports::TutorialRepository;

pub struct GetAllTutorialsByCategoryIdHandler {
    repository: Arc<dyn TutorialRepository>,
}

impl GetAllTutorialsByCategoryIdHandler {
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    /// Unknown categories yield an empty list rather than an error.
    pub async fn handle(
        &self,
        query: GetAllTutorialsByCategoryIdQuery,
    ) -> Result<Vec<Tutorial>, PublishingError> {
        let tutorials = self
            .repository
            .find_by_category_id(query.category_id)
            .await?;
        debug!(
            category_id = %query.category_id,
            count = tutorials.len(),
            "Listed tutorials for category"
        );
        Ok(tutorials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockTutorialRepository;
    use crate::domain::foundation::CategoryId;

    #[tokio::test]
    async fn returns_only_tutorials_of_that_category() {
        let repo = MockTutorialRepository::new()
            .with_tutorial("Ownership", 1)
            .with_tutorial("Channels", 2)
            .with_tutorial("Borrowing", 1);
        let handler = GetAllTutorialsByCategoryIdHandler::new(Arc::new(repo));

        let tutorials = handler
            .handle(GetAllTutorialsByCategoryIdQuery { category_id: CategoryId::new(1) })
            .await
            .unwrap();

        assert_eq!(tutorials.len(), 2);
        assert!(tutorials.iter().all(|t| t.category_id() == CategoryId::new(1)));
    }

    #[tokio::test]
    async fn unknown_category_yields_empty_list() {
        let handler = GetAllTutorialsByCategoryIdHandler::new(Arc::new(MockTutorialRepository::new()));

        let tutorials = handler
            .handle(GetAllTutorialsByCategoryIdQuery { category_id: CategoryId::new(3) })
            .await
            .unwrap();

        assert!(tutorials.is_empty());
    }
}
