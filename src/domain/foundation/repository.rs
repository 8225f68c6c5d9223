//! Base repository trait for persistence operations.
//!
//! This module provides the generic `Repository<T, ID>` trait that defines
//! the standard interface shared by all aggregate repositories.
//!
//! Each aggregate repository extends this trait and only adds its own
//! natural-key lookups.
//!
//! # Example
//!
//! ```ignore
//! #[async_trait]
//! pub trait ProfileRepository: Repository<Profile, ProfileId> {
//!     async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, DomainError>;
//! }
//!
//! // The handler only needs to know about the trait
//! pub struct CreateProfileHandler {
//!     repository: Arc<dyn ProfileRepository>,
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Base trait for aggregate repositories.
///
/// # Type Parameters
///
/// - `T`: The aggregate root type being persisted
/// - `ID`: The identifier type for the aggregate (e.g., `CategoryId`)
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// storage errors into `DatabaseError` and let them propagate unhandled.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Persists a new aggregate.
    ///
    /// Returns the aggregate with its storage-assigned identity.
    async fn add(&self, entity: T) -> Result<T, DomainError>;

    /// Finds an aggregate by its unique identifier.
    ///
    /// Returns `Ok(None)` if the aggregate doesn't exist.
    /// Returns `Err` only for infrastructure failures.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Returns every stored aggregate. No ordering is guaranteed.
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    /// Writes back an existing aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if the aggregate doesn't exist or on infrastructure failure.
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Checks if an aggregate with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`. Override if a more
    /// efficient existence check is available (e.g., COUNT query).
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestEntity {
        id: u32,
        name: String,
    }

    struct InMemoryTestRepo {
        data: Mutex<HashMap<u32, TestEntity>>,
    }

    impl InMemoryTestRepo {
        fn new() -> Self {
            Self {
                data: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Repository<TestEntity, u32> for InMemoryTestRepo {
        async fn add(&self, mut entity: TestEntity) -> Result<TestEntity, DomainError> {
            let mut data = self.data.lock().unwrap();
            entity.id = data.len() as u32 + 1;
            data.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn find_by_id(&self, id: u32) -> Result<Option<TestEntity>, DomainError> {
            Ok(self.data.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<TestEntity>, DomainError> {
            Ok(self.data.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, entity: &TestEntity) -> Result<(), DomainError> {
            let mut data = self.data.lock().unwrap();
            if !data.contains_key(&entity.id) {
                return Err(DomainError::new(ErrorCode::InternalError, "Entity not found"));
            }
            data.insert(entity.id, entity.clone());
            Ok(())
        }
    }

    fn entity(name: &str) -> TestEntity {
        TestEntity {
            id: 0,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn add_assigns_identity() {
        let repo = InMemoryTestRepo::new();

        let stored = repo.add(entity("New")).await.unwrap();

        assert_eq!(stored.id, 1);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_not_exists() {
        let repo = InMemoryTestRepo::new();

        let result = repo.find_by_id(999).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn find_all_returns_every_entity() {
        let repo = InMemoryTestRepo::new();
        repo.add(entity("a")).await.unwrap();
        repo.add(entity("b")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_fails_when_entity_not_exists() {
        let repo = InMemoryTestRepo::new();

        let result = repo.update(&entity("Ghost")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn exists_uses_find_by_id() {
        let repo = InMemoryTestRepo::new();
        let stored = repo.add(entity("Exists")).await.unwrap();

        assert!(repo.exists(stored.id).await.unwrap());
        assert!(!repo.exists(999).await.unwrap());
    }

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Repository<TestEntity, u32>) {}
}
