//! HTTP adapter for the publishing endpoints (categories and tutorials).

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddVideoAssetToTutorialResource, AssetResource, CategoryResource, CreateCategoryResource,
    CreateTutorialResource, TutorialResource,
};
pub use handlers::PublishingHandlers;
pub use routes::{category_routes, tutorial_routes};
