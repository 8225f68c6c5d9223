//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Profile handlers
    CreateProfileHandler, GetAllProfilesHandler, GetProfileByEmailHandler, GetProfileByIdHandler,
    // Publishing handlers
    AddVideoAssetToTutorialHandler, CreateCategoryHandler, CreateTutorialHandler,
    GetAllCategoriesHandler, GetAllTutorialsByCategoryIdHandler, GetAllTutorialsHandler,
    GetCategoryByIdHandler, GetTutorialByIdHandler,
};
