//! In-memory TutorialRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CategoryId, DomainError, Repository, TutorialId};
use crate::domain::publishing::Tutorial;
use crate::ports::TutorialRepository;

use super::Sequence;

#[derive(Debug, Clone, Default)]
pub struct InMemoryTutorialRepository {
    tutorials: Arc<RwLock<HashMap<TutorialId, Tutorial>>>,
    sequence: Arc<Sequence>,
}

impl InMemoryTutorialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Tutorial, TutorialId> for InMemoryTutorialRepository {
    async fn add(&self, tutorial: Tutorial) -> Result<Tutorial, DomainError> {
        let tutorial = tutorial.with_id(TutorialId::new(self.sequence.next()));
        self.tutorials
            .write()
            .await
            .insert(tutorial.id(), tutorial.clone());
        Ok(tutorial)
    }

    async fn find_by_id(&self, id: TutorialId) -> Result<Option<Tutorial>, DomainError> {
        Ok(self.tutorials.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tutorial>, DomainError> {
        Ok(self.tutorials.read().await.values().cloned().collect())
    }

    async fn update(&self, tutorial: &Tutorial) -> Result<(), DomainError> {
        let mut tutorials = self.tutorials.write().await;
        match tutorials.get_mut(&tutorial.id()) {
            Some(existing) => {
                *existing = tutorial.clone();
                Ok(())
            }
            None => Err(DomainError::database(format!(
                "Tutorial not found: {}",
                tutorial.id()
            ))),
        }
    }
}

#[async_trait]
impl TutorialRepository for InMemoryTutorialRepository {
    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Tutorial>, DomainError> {
        Ok(self
            .tutorials
            .read()
            .await
            .values()
            .filter(|t| t.category_id() == category_id)
            .cloned()
            .collect())
    }
}
