//! GetTutorialByIdHandler - Query handler for a single tutorial.

use std::sync::Arc;
use tracing::debug;

use crate::domain::publishing::{GetTutorialByIdQuery, PublishingError, Tutorial};
use crate::ports::TutorialRepository;

pub struct GetTutorialByIdHandler {
    repository: Arc<dyn TutorialRepository>,
}

impl GetTutorialByIdHandler {
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetTutorialByIdQuery,
    ) -> Result<Option<Tutorial>, PublishingError> {
        debug!(tutorial_id = %query.tutorial_id, "Fetching tutorial");
        Ok(self.repository.find_by_id(query.tutorial_id).await?)
    }
}
