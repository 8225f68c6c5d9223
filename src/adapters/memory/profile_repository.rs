//! In-memory ProfileRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProfileId, Repository};
use crate::domain::profiles::{EmailAddress, Profile};
use crate::ports::ProfileRepository;

use super::Sequence;

/// In-memory storage for profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<ProfileId, Profile>>>,
    sequence: Arc<Sequence>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored profiles
    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl Repository<Profile, ProfileId> for InMemoryProfileRepository {
    async fn add(&self, profile: Profile) -> Result<Profile, DomainError> {
        let profile = profile.with_id(ProfileId::new(self.sequence.next()));
        self.profiles
            .write()
            .await
            .insert(profile.id(), profile.clone());
        Ok(profile)
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.get_mut(&profile.id()) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(())
            }
            None => Err(DomainError::database(format!(
                "Profile not found: {}",
                profile.id()
            ))),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        let mut matches: Vec<&Profile> = profiles.values().filter(|p| p.email() == email).collect();
        // lowest id first so duplicates resolve deterministically
        matches.sort_by_key(|p| p.id());
        Ok(matches.first().map(|p| (*p).clone()))
    }
}
