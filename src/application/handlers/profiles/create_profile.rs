//! CreateProfileHandler - Command handler for registering profiles.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::CommandMetadata;
use crate::domain::profiles::{CreateProfileCommand, Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Validates the command, persists the profile and returns it with its
    /// assigned id.
    pub async fn handle(
        &self,
        cmd: CreateProfileCommand,
        metadata: CommandMetadata,
    ) -> Result<Profile, ProfileError> {
        let correlation_id = metadata.correlation_id();

        let profile = Profile::from_command(&cmd).map_err(|e| {
            warn!(correlation_id = %correlation_id, error = %e, "Rejected profile");
            e
        })?;

        let profile = self.repository.add(profile).await?;

        info!(
            correlation_id = %correlation_id,
            source = metadata.source().unwrap_or("unknown"),
            profile_id = %profile.id(),
            "Profile created"
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockProfileRepository;

    fn valid_command() -> CreateProfileCommand {
        CreateProfileCommand {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@acme.dev".to_string(),
            street: "Main St".to_string(),
            number: "12".to_string(),
            city: "London".to_string(),
            postal_code: "N1 9GU".to_string(),
            country: "UK".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_profile_with_assigned_id() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = CreateProfileHandler::new(repo.clone());

        let profile = handler
            .handle(valid_command(), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert!(profile.id().is_assigned());
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert_eq!(repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn rejects_invalid_email_without_persisting() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = CreateProfileHandler::new(repo.clone());
        let cmd = CreateProfileCommand {
            email: "not-an-email".to_string(),
            ..valid_command()
        };

        let result = handler.handle(cmd, CommandMetadata::test_fixture()).await;

        assert!(matches!(
            result,
            Err(ProfileError::ValidationFailed { ref field, .. }) if field == "email"
        ));
        assert!(repo.stored().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let handler = CreateProfileHandler::new(Arc::new(MockProfileRepository::failing()));

        let result = handler
            .handle(valid_command(), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(ProfileError::Infrastructure(_))));
    }
}
