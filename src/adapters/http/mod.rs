//! HTTP adapters - REST API implementations.
//!
//! Each bounded context has its own HTTP adapter; [`build_app_router`]
//! nests them under `/api/v1` and applies the middleware stack.

pub mod error;
pub mod profiles;
pub mod publishing;

pub use error::ErrorResponse;
pub use profiles::{profile_routes, ProfileHandlers};
pub use publishing::{category_routes, tutorial_routes, PublishingHandlers};

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{warn, Level};

use crate::config::ServerConfig;
use crate::domain::foundation::CommandMetadata;

/// Header carrying a caller-supplied correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Build the full application router with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Structured request/response tracing
/// 3. Request timeout
pub fn build_app_router(
    profiles: ProfileHandlers,
    publishing: PublishingHandlers,
    config: &ServerConfig,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/profiles", profile_routes(profiles))
        .nest("/api/v1/categories", category_routes(publishing.clone()))
        .nest("/api/v1/tutorials", tutorial_routes(publishing))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(config))
}

/// Build the CORS layer from configured origins. Invalid origins are skipped.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Command metadata for a request, tagged with the correlation header when present.
pub(crate) fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(id) if !id.is_empty() => metadata.with_correlation_id(id),
        _ => metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_metadata_uses_correlation_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, HeaderValue::from_static("req-42"));

        let metadata = command_metadata(&headers);

        assert_eq!(metadata.correlation_id(), "req-42");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn command_metadata_without_header_still_has_source() {
        let metadata = command_metadata(&HeaderMap::new());
        assert_eq!(metadata.source(), Some("http"));
    }
}
