//! Mutex-backed repository doubles shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{
    CategoryId, DomainError, ErrorCode, ProfileId, Repository, TutorialId,
};
use crate::domain::profiles::{EmailAddress, Profile};
use crate::domain::publishing::{Category, Tutorial};
use crate::ports::{CategoryRepository, ProfileRepository, TutorialRepository};

fn storage_failure() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "Simulated storage failure")
}

// ════════════════════════════════════════════════════════════════════════════
// Profiles
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Mutex<Vec<Profile>>,
    fail: bool,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn stored(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository<Profile, ProfileId> for MockProfileRepository {
    async fn add(&self, profile: Profile) -> Result<Profile, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        let mut profiles = self.profiles.lock().unwrap();
        let stored = profile.with_id(ProfileId::new(profiles.len() as i64 + 1));
        profiles.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self.profiles.lock().unwrap().iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self.stored())
    }

    async fn update(&self, _profile: &Profile) -> Result<(), DomainError> {
        unimplemented!()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email() == email)
            .cloned())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Categories
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockCategoryRepository {
    categories: Mutex<Vec<Category>>,
    fail: bool,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Stores a category directly, bypassing the handler under test.
    pub fn with_category(self, name: &str) -> Self {
        {
            let mut categories = self.categories.lock().unwrap();
            let id = CategoryId::new(categories.len() as i64 + 1);
            categories.push(Category::new(name).unwrap().with_id(id));
        }
        self
    }

    pub fn stored(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository<Category, CategoryId> for MockCategoryRepository {
    async fn add(&self, category: Category) -> Result<Category, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        let mut categories = self.categories.lock().unwrap();
        let stored = category.with_id(CategoryId::new(categories.len() as i64 + 1));
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self.categories.lock().unwrap().iter().find(|c| c.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self.stored())
    }

    async fn update(&self, _category: &Category) -> Result<(), DomainError> {
        unimplemented!()
    }
}

impl CategoryRepository for MockCategoryRepository {}

// ════════════════════════════════════════════════════════════════════════════
// Tutorials
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockTutorialRepository {
    tutorials: Mutex<Vec<Tutorial>>,
    fail: bool,
}

impl MockTutorialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            tutorials: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Stores a tutorial directly, bypassing the handler under test.
    pub fn with_tutorial(self, title: &str, category_id: i64) -> Self {
        {
            let mut tutorials = self.tutorials.lock().unwrap();
            let id = TutorialId::new(tutorials.len() as i64 + 1);
            let tutorial = Tutorial::new(title, "", CategoryId::new(category_id)).unwrap();
            tutorials.push(tutorial.with_id(id));
        }
        self
    }

    pub fn stored(&self) -> Vec<Tutorial> {
        self.tutorials.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository<Tutorial, TutorialId> for MockTutorialRepository {
    async fn add(&self, tutorial: Tutorial) -> Result<Tutorial, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        let mut tutorials = self.tutorials.lock().unwrap();
        let stored = tutorial.with_id(TutorialId::new(tutorials.len() as i64 + 1));
        tutorials.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TutorialId) -> Result<Option<Tutorial>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self.tutorials.lock().unwrap().iter().find(|t| t.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tutorial>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self.stored())
    }

    async fn update(&self, tutorial: &Tutorial) -> Result<(), DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        let mut tutorials = self.tutorials.lock().unwrap();
        match tutorials.iter_mut().find(|t| t.id() == tutorial.id()) {
            Some(existing) => {
                *existing = tutorial.clone();
                Ok(())
            }
            None => Err(DomainError::database("Tutorial not found")),
        }
    }
}

#[async_trait]
impl TutorialRepository for MockTutorialRepository {
    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Tutorial>, DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(self
            .tutorials
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.category_id() == category_id)
            .cloned()
            .collect())
    }
}
