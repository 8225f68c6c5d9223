//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, ProfileId, Repository},
    profiles::{EmailAddress, Profile},
};

/// Repository for managing profiles
#[async_trait]
pub trait ProfileRepository: Repository<Profile, ProfileId> {
    /// Find a profile by its email address.
    ///
    /// Emails are not unique; the first match wins.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, DomainError>;
}
