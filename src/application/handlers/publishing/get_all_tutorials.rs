//! GetAllTutorialsHandler - Query handler listing every tutorial.

use std::sync::Arc;
use tracing::debug;

use crate::domain::publishing::{GetAllTutorialsQuery, PublishingError, Tutorial};
use crate::ports::TutorialRepository;

pub struct GetAllTutorialsHandler {
    repository: Arc<dyn TutorialRepository>,
}

impl GetAllTutorialsHandler {
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        _query: GetAllTutorialsQuery,
    ) -> Result<Vec<Tutorial>, PublishingError> {
        let tutorials = self.repository.find_all().await?;
        debug!(count = tutorials.len(), "Listed tutorials");
        Ok(tutorials)
    }
}
