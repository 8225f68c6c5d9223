//! HTTP routes for category and tutorial endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_video_asset, create_category, create_tutorial, get_category_by_id, get_tutorial_by_id,
    list_categories, list_category_tutorials, list_tutorials, PublishingHandlers,
};

/// Creates the category router, to be nested under `/api/v1/categories`.
///
/// Routes:
/// - `GET /` - List categories
/// - `POST /` - Create a category
/// - `GET /:id` - Get a category
/// - `GET /:id/tutorials` - List the category's tutorials
pub fn category_routes(handlers: PublishingHandlers) -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category_by_id))
        .route("/:id/tutorials", get(list_category_tutorials))
        .with_state(handlers)
}

/// Creates the tutorial router, to be nested under `/api/v1/tutorials`.
///
/// Routes:
/// - `GET /` - List tutorials
/// - `POST /` - Create a tutorial
/// - `GET /:id` - Get a tutorial
/// - `POST /:id/videos` - Attach a video
pub fn tutorial_routes(handlers: PublishingHandlers) -> Router {
    Router::new()
        .route("/", get(list_tutorials).post(create_tutorial))
        .route("/:id", get(get_tutorial_by_id))
        .route("/:id/videos", post(add_video_asset))
        .with_state(handlers)
}
