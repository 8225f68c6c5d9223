//! Category entity.

use crate::domain::foundation::{require_non_empty, CategoryId, Timestamp, ValidationError};

use super::commands::CreateCategoryCommand;

/// Groups tutorials by subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Category {
    /// Creates a transient category.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let now = Timestamp::now();
        Ok(Self {
            id: CategoryId::default(),
            name: require_non_empty("name", name)?,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_command(cmd: &CreateCategoryCommand) -> Result<Self, ValidationError> {
        Self::new(&cmd.name)
    }

    /// Reconstitute a category from persistence (no validation).
    pub fn reconstitute(
        id: CategoryId,
        name: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    /// Returns the category with its storage-assigned identity.
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Changes the name, returning the previous one.
    pub fn rename(&mut self, name: &str) -> Result<String, ValidationError> {
        let name = require_non_empty("name", name)?;
        let old = std::mem::replace(&mut self.name, name);
        self.updated_at = Timestamp::now();
        Ok(old)
    }
}
