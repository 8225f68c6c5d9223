//! CreateTutorialHandler - Command handler for creating tutorials.
//!
//! The referenced category must exist; tutorials are never created as
//! orphans.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::CommandMetadata;
use crate::domain::publishing::{CreateTutorialCommand, PublishingError, Tutorial};
use crate::ports::{CategoryRepository, TutorialRepository};

/// Handler for creating tutorials.
pub struct CreateTutorialHandler {
    tutorials: Arc<dyn TutorialRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CreateTutorialHandler {
    pub fn new(
        tutorials: Arc<dyn TutorialRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            tutorials,
            categories,
        }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the title is blank
    /// - `CategoryNotFound` if the category does not exist
    pub async fn handle(
        &self,
        cmd: CreateTutorialCommand,
        metadata: CommandMetadata,
    ) -> Result<Tutorial, PublishingError> {
        let correlation_id = metadata.correlation_id();

        // 1. Validate before touching storage
        let tutorial = Tutorial::from_command(&cmd)?;

        // 2. Category must exist
        if !self.categories.exists(cmd.category_id).await? {
            warn!(
                correlation_id = %correlation_id,
                category_id = %cmd.category_id,
                "Tutorial references unknown category"
            );
            return Err(PublishingError::category_not_found(cmd.category_id));
        }

        // 3. Persist
        let tutorial = self.tutorials.add(tutorial).await?;

        info!(
            correlation_id = %correlation_id,
            tutorial_id = %tutorial.id(),
            category_id = %tutorial.category_id(),
            "Tutorial created"
        );

        Ok(tutorial)
    }
}
