//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::command_metadata;
use crate::adapters::http::error::{body_rejection, ErrorResponse};
use crate::application::handlers::profiles::{
    CreateProfileHandler, GetAllProfilesHandler, GetProfileByEmailHandler, GetProfileByIdHandler,
};
use crate::domain::foundation::{ErrorCode, ProfileId};
use crate::domain::profiles::{
    GetAllProfilesQuery, GetProfileByEmailQuery, GetProfileByIdQuery, ProfileError,
};
use crate::ports::ProfileRepository;

use super::dto::{CreateProfileResource, ProfileResource, ProfileSearchParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    create_handler: Arc<CreateProfileHandler>,
    get_by_id_handler: Arc<GetProfileByIdHandler>,
    get_by_email_handler: Arc<GetProfileByEmailHandler>,
    get_all_handler: Arc<GetAllProfilesHandler>,
}

impl ProfileHandlers {
    /// Wires every profile handler to one repository.
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateProfileHandler::new(repository.clone())),
            get_by_id_handler: Arc::new(GetProfileByIdHandler::new(repository.clone())),
            get_by_email_handler: Arc::new(GetProfileByEmailHandler::new(repository.clone())),
            get_all_handler: Arc::new(GetAllProfilesHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/profiles - Create a profile
pub async fn create_profile(
    State(handlers): State<ProfileHandlers>,
    headers: HeaderMap,
    body: Result<Json<CreateProfileResource>, JsonRejection>,
) -> Response {
    let Json(resource) = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection(rejection),
    };
    let metadata = command_metadata(&headers);

    match handlers.create_handler.handle(resource.into(), metadata).await {
        Ok(profile) => {
            let location = format!("/api/v1/profiles/{}", profile.id());
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ProfileResource::from(&profile)),
            )
                .into_response()
        }
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/v1/profiles/:id - Get a profile
pub async fn get_profile_by_id(
    State(handlers): State<ProfileHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(profile_id) = raw_id.parse::<ProfileId>() else {
        return profile_not_found(&raw_id);
    };

    match handlers
        .get_by_id_handler
        .handle(GetProfileByIdQuery { profile_id })
        .await
    {
        Ok(Some(profile)) => (StatusCode::OK, Json(ProfileResource::from(&profile))).into_response(),
        Ok(None) => profile_not_found(&raw_id),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/v1/profiles[?email=] - List profiles, or look one up by email
pub async fn list_profiles(
    State(handlers): State<ProfileHandlers>,
    Query(params): Query<ProfileSearchParams>,
) -> Response {
    if let Some(email) = params.email {
        return match handlers
            .get_by_email_handler
            .handle(GetProfileByEmailQuery { email: email.clone() })
            .await
        {
            Ok(Some(profile)) => {
                (StatusCode::OK, Json(ProfileResource::from(&profile))).into_response()
            }
            Ok(None) => profile_not_found(&email),
            Err(e) => handle_profile_error(e),
        };
    }

    match handlers.get_all_handler.handle(GetAllProfilesQuery).await {
        Ok(profiles) => {
            let resources: Vec<ProfileResource> = profiles.iter().map(ProfileResource::from).collect();
            (StatusCode::OK, Json(resources)).into_response()
        }
        Err(e) => handle_profile_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn profile_not_found(key: &str) -> Response {
    ErrorResponse::new(
        ErrorCode::ProfileNotFound,
        format!("Profile not found: {}", key),
    )
    .into_response_with(StatusCode::NOT_FOUND)
}

fn handle_profile_error(error: ProfileError) -> Response {
    match error {
        ProfileError::ValidationFailed { .. } => {
            ErrorResponse::new(error.code(), error.message())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        ProfileError::Infrastructure(msg) => {
            error!(error = %msg, "Profile request failed");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
