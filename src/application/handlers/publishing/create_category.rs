//! CreateCategoryHandler - Command handler for creating categories.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::CommandMetadata;
use crate::domain::publishing::{Category, CreateCategoryCommand, PublishingError};
use crate::ports::CategoryRepository;

/// Handler for creating categories.
pub struct CreateCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateCategoryCommand,
        metadata: CommandMetadata,
    ) -> Result<Category, PublishingError> {
        let correlation_id = metadata.correlation_id();

        let category = Category::from_command(&cmd).map_err(|e| {
            warn!(correlation_id = %correlation_id, error = %e, "Rejected category");
            e
        })?;

        let category = self.repository.add(category).await?;

        info!(
            correlation_id = %correlation_id,
            category_id = %category.id(),
            name = category.name(),
            "Category created"
        );

        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockCategoryRepository;

    #[tokio::test]
    async fn creates_category_with_assigned_id() {
        let repo = Arc::new(MockCategoryRepository::new());
        let handler = CreateCategoryHandler::new(repo.clone());

        let category = handler
            .handle(
                CreateCategoryCommand { name: "Rust".to_string() },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert!(category.id().is_assigned());
        assert_eq!(category.name(), "Rust");
        assert_eq!(repo.stored(), vec![category]);
    }

    #[tokio::test]
    async fn blank_name_fails_validation() {
        let repo = Arc::new(MockCategoryRepository::new());
        let handler = CreateCategoryHandler::new(repo.clone());

        let result = handler
            .handle(
                CreateCategoryCommand { name: "   ".to_string() },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(PublishingError::ValidationFailed { .. })));
        assert!(repo.stored().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let handler = CreateCategoryHandler::new(Arc::new(MockCategoryRepository::failing()));

        let result = handler
            .handle(
                CreateCategoryCommand { name: "Rust".to_string() },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(PublishingError::Infrastructure(_))));
    }
}
