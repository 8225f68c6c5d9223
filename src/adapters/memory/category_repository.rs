//! In-memory CategoryRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CategoryId, DomainError, Repository};
use crate::domain::publishing::Category;
use crate::ports::CategoryRepository;

use super::Sequence;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
    sequence: Arc<Sequence>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Category, CategoryId> for InMemoryCategoryRepository {
    async fn add(&self, category: Category) -> Result<Category, DomainError> {
        let category = category.with_id(CategoryId::new(self.sequence.next()));
        self.categories
            .write()
            .await
            .insert(category.id(), category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.read().await.values().cloned().collect())
    }

    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let mut categories = self.categories.write().await;
        match categories.get_mut(&category.id()) {
            Some(existing) => {
                *existing = category.clone();
                Ok(())
            }
            None => Err(DomainError::database(format!(
                "Category not found: {}",
                category.id()
            ))),
        }
    }
}

impl CategoryRepository for InMemoryCategoryRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stored_category_can_be_found_and_renamed() {
        let repo = InMemoryCategoryRepository::new();
        let mut category = repo.add(Category::new("Web").unwrap()).await.unwrap();

        category.rename("Web Development").unwrap();
        repo.update(&category).await.unwrap();

        let found = repo.find_by_id(category.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Web Development");
        assert!(repo.exists(category.id()).await.unwrap());
        assert!(!repo.exists(CategoryId::new(99)).await.unwrap());
    }
}
