//! AddVideoAssetToTutorialHandler - Command handler attaching a video to a tutorial.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::CommandMetadata;
use crate::domain::publishing::{AddVideoAssetToTutorialCommand, PublishingError, Tutorial};
use crate::ports::TutorialRepository;

/// Handler for adding video assets.
pub struct AddVideoAssetToTutorialHandler {
    repository: Arc<dyn TutorialRepository>,
}

impl AddVideoAssetToTutorialHandler {
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `TutorialNotFound` if the tutorial does not exist
    /// - `ValidationFailed` if the video URL is not an absolute URI
    pub async fn handle(
        &self,
        cmd: AddVideoAssetToTutorialCommand,
        metadata: CommandMetadata,
    ) -> Result<Tutorial, PublishingError> {
        let correlation_id = metadata.correlation_id();

        // 1. Load the aggregate
        let mut tutorial = match self.repository.find_by_id(cmd.tutorial_id).await? {
            Some(tutorial) => tutorial,
            None => {
                warn!(
                    correlation_id = %correlation_id,
                    tutorial_id = %cmd.tutorial_id,
                    "Video added to unknown tutorial"
                );
                return Err(PublishingError::tutorial_not_found(cmd.tutorial_id));
            }
        };

        // 2. Mutate through the aggregate
        tutorial.add_video(&cmd.video_url)?;

        // 3. Write back
        self.repository.update(&tutorial).await?;

        info!(
            correlation_id = %correlation_id,
            tutorial_id = %tutorial.id(),
            asset_count = tutorial.assets().len(),
            "Video asset added"
        );

        Ok(tutorial)
    }
}
