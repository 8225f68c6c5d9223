//! HTTP handlers for category and tutorial endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::command_metadata;
use crate::adapters::http::error::{body_rejection, ErrorResponse};
use crate::application::handlers::publishing::{
    AddVideoAssetToTutorialHandler, CreateCategoryHandler, CreateTutorialHandler,
    GetAllCategoriesHandler, GetAllTutorialsByCategoryIdHandler, GetAllTutorialsHandler,
    GetCategoryByIdHandler, GetTutorialByIdHandler,
};
use crate::domain::foundation::{CategoryId, ErrorCode, TutorialId};
use crate::domain::publishing::{
    GetAllCategoriesQuery, GetAllTutorialsByCategoryIdQuery, GetAllTutorialsQuery,
    GetCategoryByIdQuery, GetTutorialByIdQuery, PublishingError,
};
use crate::ports::{CategoryRepository, TutorialRepository};

use super::dto::{
    AddVideoAssetToTutorialResource, CategoryResource, CreateCategoryResource,
    CreateTutorialResource, TutorialResource,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PublishingHandlers {
    create_category: Arc<CreateCategoryHandler>,
    get_category: Arc<GetCategoryByIdHandler>,
    list_categories: Arc<GetAllCategoriesHandler>,
    create_tutorial: Arc<CreateTutorialHandler>,
    add_video: Arc<AddVideoAssetToTutorialHandler>,
    get_tutorial: Arc<GetTutorialByIdHandler>,
    list_tutorials: Arc<GetAllTutorialsHandler>,
    list_tutorials_by_category: Arc<GetAllTutorialsByCategoryIdHandler>,
}

impl PublishingHandlers {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        tutorials: Arc<dyn TutorialRepository>,
    ) -> Self {
        Self {
            create_category: Arc::new(CreateCategoryHandler::new(categories.clone())),
            get_category: Arc::new(GetCategoryByIdHandler::new(categories.clone())),
            list_categories: Arc::new(GetAllCategoriesHandler::new(categories.clone())),
            create_tutorial: Arc::new(CreateTutorialHandler::new(tutorials.clone(), categories)),
            add_video: Arc::new(AddVideoAssetToTutorialHandler::new(tutorials.clone())),
            get_tutorial: Arc::new(GetTutorialByIdHandler::new(tutorials.clone())),
            list_tutorials: Arc::new(GetAllTutorialsHandler::new(tutorials.clone())),
            list_tutorials_by_category: Arc::new(GetAllTutorialsByCategoryIdHandler::new(tutorials)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Category handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/categories - Create a category
pub async fn create_category(
    State(handlers): State<PublishingHandlers>,
    headers: HeaderMap,
    body: Result<Json<CreateCategoryResource>, JsonRejection>,
) -> Response {
    let Json(resource) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(rejection),
    };
    let metadata = command_metadata(&headers);

    match handlers.create_category.handle(resource.into(), metadata).await {
        Ok(category) => created(
            format!("/api/v1/categories/{}", category.id()),
            CategoryResource::from(&category),
        ),
        Err(e) => handle_publishing_error(e),
    }
}

/// GET /api/v1/categories/:id - Get a category
pub async fn get_category_by_id(
    State(handlers): State<PublishingHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(category_id) = raw_id.parse::<CategoryId>() else {
        return not_found(ErrorCode::CategoryNotFound, "Category", &raw_id);
    };

    match handlers
        .get_category
        .handle(GetCategoryByIdQuery { category_id })
        .await
    {
        Ok(Some(category)) => {
            (StatusCode::OK, Json(CategoryResource::from(&category))).into_response()
        }
        Ok(None) => not_found(ErrorCode::CategoryNotFound, "Category", &raw_id),
        Err(e) => handle_publishing_error(e),
    }
}

/// GET /api/v1/categories - List categories
pub async fn list_categories(State(handlers): State<PublishingHandlers>) -> Response {
    match handlers.list_categories.handle(GetAllCategoriesQuery).await {
        Ok(categories) => {
            let resources: Vec<CategoryResource> =
                categories.iter().map(CategoryResource::from).collect();
            (StatusCode::OK, Json(resources)).into_response()
        }
        Err(e) => handle_publishing_error(e),
    }
}

/// GET /api/v1/categories/:id/tutorials - List a category's tutorials
pub async fn list_category_tutorials(
    State(handlers): State<PublishingHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(category_id) = raw_id.parse::<CategoryId>() else {
        return not_found(ErrorCode::CategoryNotFound, "Category", &raw_id);
    };

    match handlers
        .list_tutorials_by_category
        .handle(GetAllTutorialsByCategoryIdQuery { category_id })
        .await
    {
        Ok(tutorials) => tutorial_list(&tutorials),
        Err(e) => handle_publishing_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tutorial handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/tutorials - Create a tutorial
pub async fn create_tutorial(
    State(handlers): State<PublishingHandlers>,
    headers: HeaderMap,
    body: Result<Json<CreateTutorialResource>, JsonRejection>,
) -> Response {
    let Json(resource) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(rejection),
    };
    let metadata = command_metadata(&headers);

    match handlers.create_tutorial.handle(resource.into(), metadata).await {
        Ok(tutorial) => created(
            format!("/api/v1/tutorials/{}", tutorial.id()),
            TutorialResource::from(&tutorial),
        ),
        Err(e) => handle_publishing_error(e),
    }
}

/// GET /api/v1/tutorials/:id - Get a tutorial
pub async fn get_tutorial_by_id(
    State(handlers): State<PublishingHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(tutorial_id) = raw_id.parse::<TutorialId>() else {
        return not_found(ErrorCode::TutorialNotFound, "Tutorial", &raw_id);
    };

    match handlers
        .get_tutorial
        .handle(GetTutorialByIdQuery { tutorial_id })
        .await
    {
        Ok(Some(tutorial)) => {
            (StatusCode::OK, Json(TutorialResource::from(&tutorial))).into_response()
        }
        Ok(None) => not_found(ErrorCode::TutorialNotFound, "Tutorial", &raw_id),
        Err(e) => handle_publishing_error(e),
    }
}

/// GET /api/v1/tutorials - List tutorials
pub async fn list_tutorials(State(handlers): State<PublishingHandlers>) -> Response {
    match handlers.list_tutorials.handle(GetAllTutorialsQuery).await {
        Ok(tutorials) => tutorial_list(&tutorials),
        Err(e) => handle_publishing_error(e),
    }
}

/// POST /api/v1/tutorials/:id/videos - Attach a video to a tutorial
pub async fn add_video_asset(
    State(handlers): State<PublishingHandlers>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<AddVideoAssetToTutorialResource>, JsonRejection>,
) -> Response {
    let Ok(tutorial_id) = raw_id.parse::<TutorialId>() else {
        return not_found(ErrorCode::TutorialNotFound, "Tutorial", &raw_id);
    };
    let Json(resource) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(rejection),
    };
    let metadata = command_metadata(&headers);

    match handlers
        .add_video
        .handle(resource.into_command(tutorial_id), metadata)
        .await
    {
        Ok(tutorial) => created(
            format!("/api/v1/tutorials/{}", tutorial.id()),
            TutorialResource::from(&tutorial),
        ),
        Err(e) => handle_publishing_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

fn created<T: serde::Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response()
}

fn tutorial_list(tutorials: &[crate::domain::publishing::Tutorial]) -> Response {
    let resources: Vec<TutorialResource> = tutorials.iter().map(TutorialResource::from).collect();
    (StatusCode::OK, Json(resources)).into_response()
}

fn not_found(code: ErrorCode, resource: &str, id: &str) -> Response {
    ErrorResponse::new(code, format!("{} not found: {}", resource, id))
        .into_response_with(StatusCode::NOT_FOUND)
}

/// Commands report missing references as a failed creation (400), not 404.
fn handle_publishing_error(error: PublishingError) -> Response {
    match error {
        PublishingError::CategoryNotFound(_)
        | PublishingError::TutorialNotFound(_)
        | PublishingError::ValidationFailed { .. } => {
            ErrorResponse::new(error.code(), error.message())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        PublishingError::Infrastructure(msg) => {
            error!(error = %msg, "Publishing request failed");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
