//! Commands and queries of the publishing context.

use crate::domain::foundation::{CategoryId, TutorialId};

/// Command to create a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: String,
}

/// Command to create a tutorial in an existing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTutorialCommand {
    pub title: String,
    pub summary: String,
    pub category_id: CategoryId,
}

/// Command to attach a video to an existing tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddVideoAssetToTutorialCommand {
    pub video_url: String,
    pub tutorial_id: TutorialId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCategoryByIdQuery {
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllCategoriesQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTutorialByIdQuery {
    pub tutorial_id: TutorialId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllTutorialsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAllTutorialsByCategoryIdQuery {
    pub category_id: CategoryId,
}
