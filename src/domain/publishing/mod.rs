//! Publishing bounded context.
//!
//! Categories group tutorials; tutorials own their assets (images, videos
//! and readable content).

mod asset;
mod category;
mod commands;
mod content_item;
mod errors;
mod tutorial;

pub use asset::{
    AcmeAssetIdentifier, Asset, AssetKind, AssetType, ImageAsset, PublishingStatus,
    ReadableContentAsset, VideoAsset,
};
pub use category::Category;
pub use commands::{
    AddVideoAssetToTutorialCommand, CreateCategoryCommand, CreateTutorialCommand,
    GetAllCategoriesQuery, GetAllTutorialsByCategoryIdQuery, GetAllTutorialsQuery,
    GetCategoryByIdQuery, GetTutorialByIdQuery,
};
pub use content_item::ContentItem;
pub use errors::PublishingError;
pub use tutorial::Tutorial;

/// Cross-context reference to a profile, held without ownership.
pub use crate::domain::foundation::ProfileId;
