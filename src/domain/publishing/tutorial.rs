//! Tutorial aggregate.
//!
//! A tutorial belongs to one category (referenced by id, not owned) and owns
//! an ordered list of assets.

use crate::domain::foundation::{
    require_non_empty, CategoryId, Timestamp, TutorialId, ValidationError,
};

use super::asset::Asset;
use super::commands::CreateTutorialCommand;
use super::content_item::ContentItem;

/// Tutorial aggregate root.
///
/// # Invariants
///
/// - `title` is non-empty
/// - assets keep insertion order and unique identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tutorial {
    id: TutorialId,
    title: String,
    summary: String,
    category_id: CategoryId,
    assets: Vec<Asset>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Tutorial {
    /// Creates a transient tutorial without assets.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    pub fn new(title: &str, summary: &str, category_id: CategoryId) -> Result<Self, ValidationError> {
        let now = Timestamp::now();
        Ok(Self {
            id: TutorialId::default(),
            title: require_non_empty("title", title)?,
            summary: summary.trim().to_string(),
            category_id,
            assets: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_command(cmd: &CreateTutorialCommand) -> Result<Self, ValidationError> {
        Self::new(&cmd.title, &cmd.summary, cmd.category_id)
    }

    /// Reconstitute a tutorial from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TutorialId,
        title: String,
        summary: String,
        category_id: CategoryId,
        assets: Vec<Asset>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            summary,
            category_id,
            assets,
            created_at,
            updated_at,
        }
    }

    /// Returns the tutorial with its storage-assigned identity.
    pub fn with_id(mut self, id: TutorialId) -> Self {
        self.id = id;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> TutorialId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True when at least one asset is readable text.
    pub fn readable(&self) -> bool {
        self.assets.iter().any(Asset::readable)
    }

    /// True when at least one asset is an image or video.
    pub fn viewable(&self) -> bool {
        self.assets.iter().any(Asset::viewable)
    }

    /// Content of every asset, in insertion order.
    pub fn content(&self) -> Vec<ContentItem> {
        self.assets.iter().map(Asset::to_content_item).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_image(&mut self, image_url: &str) -> Result<(), ValidationError> {
        self.push(Asset::image(image_url)?);
        Ok(())
    }

    pub fn add_video(&mut self, video_url: &str) -> Result<(), ValidationError> {
        self.push(Asset::video(video_url)?);
        Ok(())
    }

    pub fn add_readable_content(&mut self, content: &str) -> Result<(), ValidationError> {
        self.push(Asset::readable_content(content)?);
        Ok(())
    }

    fn push(&mut self, asset: Asset) {
        self.assets.push(asset);
        self.updated_at = Timestamp::now();
    }
}
