//! GetProfileByIdHandler - Query handler for a single profile.

use std::sync::Arc;
use tracing::debug;

use crate::domain::profiles::{GetProfileByIdQuery, Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Handler for retrieving a profile by id.
pub struct GetProfileByIdHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileByIdHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProfileByIdQuery) -> Result<Option<Profile>, ProfileError> {
        debug!(profile_id = %query.profile_id, "Fetching profile");
        Ok(self.repository.find_by_id(query.profile_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockProfileRepository;
    use crate::domain::foundation::{ProfileId, Repository};

    #[tokio::test]
    async fn returns_stored_profile() {
        let repo = Arc::new(MockProfileRepository::new());
        let stored = repo
            .add(Profile::new("Ada", "Lovelace", "ada@acme.dev", "Main St", "12", "London", "N1", "UK").unwrap())
            .await
            .unwrap();
        let handler = GetProfileByIdHandler::new(repo);

        let found = handler
            .handle(GetProfileByIdQuery { profile_id: stored.id() })
            .await
            .unwrap();

        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn returns_none_for_unknown_id() {
        let handler = GetProfileByIdHandler::new(Arc::new(MockProfileRepository::new()));

        let found = handler
            .handle(GetProfileByIdQuery { profile_id: ProfileId::new(42) })
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
