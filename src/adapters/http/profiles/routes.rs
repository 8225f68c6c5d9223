//! HTTP routes for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_profile, get_profile_by_id, list_profiles, ProfileHandlers};

/// Creates the profile router, to be nested under `/api/v1/profiles`.
///
/// Routes:
/// - `GET /` - List profiles, or `?email=` lookup
/// - `POST /` - Create a profile
/// - `GET /:id` - Get a profile
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/:id", get(get_profile_by_id))
        .with_state(handlers)
}
