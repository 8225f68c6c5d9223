//! GetProfileByEmailHandler - Query handler for looking up a profile by email.

use std::sync::Arc;
use tracing::debug;

use crate::domain::profiles::{EmailAddress, GetProfileByEmailQuery, Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Handler for retrieving a profile by email address.
pub struct GetProfileByEmailHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileByEmailHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the query email is malformed
    pub async fn handle(
        &self,
        query: GetProfileByEmailQuery,
    ) -> Result<Option<Profile>, ProfileError> {
        let email = EmailAddress::new(&query.email)?;
        debug!(email = %email, "Fetching profile by email");
        Ok(self.repository.find_by_email(&email).await?)
    }
}
