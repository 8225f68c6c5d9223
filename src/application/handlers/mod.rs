//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, one
//! submodule per bounded context.

pub mod profiles;
pub mod publishing;

#[cfg(test)]
pub(crate) mod testing;

pub use profiles::{
    CreateProfileHandler, GetAllProfilesHandler, GetProfileByEmailHandler, GetProfileByIdHandler,
};
pub use publishing::{
    AddVideoAssetToTutorialHandler, CreateCategoryHandler, CreateTutorialHandler,
    GetAllCategoriesHandler, GetAllTutorialsByCategoryIdHandler, GetAllTutorialsHandler,
    GetCategoryByIdHandler, GetTutorialByIdHandler,
};
