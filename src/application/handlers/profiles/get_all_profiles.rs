//! GetAllProfilesHandler - Query handler listing every profile.

use std::sync::Arc;
use tracing::debug;

use crate::domain::profiles::{GetAllProfilesQuery, Profile, ProfileError};
use crate::ports::ProfileRepository;

pub struct GetAllProfilesHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetAllProfilesHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: GetAllProfilesQuery) -> Result<Vec<Profile>, ProfileError> {
        let profiles = self.repository.find_all().await?;
        debug!(count = profiles.len(), "Listed profiles");
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockProfileRepository;

    #[tokio::test]
    async fn empty_store_returns_empty_list() {
        let handler = GetAllProfilesHandler::new(Arc::new(MockProfileRepository::new()));
        assert!(handler.handle(GetAllProfilesQuery).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = GetAllProfilesHandler::new(Arc::new(MockProfileRepository::failing()));
        assert!(matches!(
            handler.handle(GetAllProfilesQuery).await,
            Err(ProfileError::Infrastructure(_))
        ));
    }
}
