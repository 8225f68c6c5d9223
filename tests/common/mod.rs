//! Shared test infrastructure: the full router over in-memory repositories.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use learning_center::adapters::http::{build_app_router, ProfileHandlers, PublishingHandlers};
use learning_center::adapters::memory::{
    InMemoryCategoryRepository, InMemoryProfileRepository, InMemoryTutorialRepository,
};
use learning_center::config::ServerConfig;

pub fn app() -> Router {
    build_app_router(
        ProfileHandlers::new(Arc::new(InMemoryProfileRepository::new())),
        PublishingHandlers::new(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryTutorialRepository::new()),
        ),
        &ServerConfig::default(),
    )
}

/// Status, `Location` header and JSON body of one request.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        location,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}
