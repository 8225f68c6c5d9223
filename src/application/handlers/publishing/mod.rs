//! Publishing command and query handlers.

mod add_video_asset_to_tutorial;
mod create_category;
mod create_tutorial;
mod get_all_categories;
mod get_all_tutorials;
mod get_all_tutorials_by_category_id;
mod get_category_by_id;
mod get_tutorial_by_id;

pub use add_video_asset_to_tutorial::AddVideoAssetToTutorialHandler;
pub use create_category::CreateCategoryHandler;
pub use create_tutorial::CreateTutorialHandler;
pub use get_all_categories::GetAllCategoriesHandler;
pub use get_all_tutorials::GetAllTutorialsHandler;
pub use get_all_tutorials_by_category_id::GetAllTutorialsByCategoryIdHandler;
pub use get_category_by_id::GetCategoryByIdHandler;
pub use get_tutorial_by_id::GetTutorialByIdHandler;
