//! Integration tests for category HTTP endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, get, post};

#[tokio::test]
async fn create_category_returns_201_with_location() {
    let app = app();

    let response = post(&app, "/api/v1/categories", json!({"name": "Rust"})).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();
    assert_eq!(response.location, Some(format!("/api/v1/categories/{}", id)));
    assert_eq!(response.body["name"], "Rust");
}

#[tokio::test]
async fn location_points_at_the_created_category() {
    let app = app();
    let created = post(&app, "/api/v1/categories", json!({"name": "Databases"})).await;

    let fetched = get(&app, &created.location.unwrap()).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Databases");
    assert_eq!(fetched.body["id"], created.body["id"]);
}

#[tokio::test]
async fn create_category_with_blank_name_returns_400() {
    let app = app();

    let response = post(&app, "/api/v1/categories", json!({"name": "  "})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn create_category_without_name_returns_400() {
    let app = app();

    let missing = post(&app, "/api/v1/categories", json!({})).await;
    let wrong_type = post(&app, "/api/v1/categories", json!({"name": 5})).await;

    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["code"], "VALIDATION_FAILED");
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(get(&app, "/api/v1/categories").await.body, json!([]));
}

#[tokio::test]
async fn unknown_category_returns_404() {
    let app = app();

    let response = get(&app, "/api/v1/categories/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "CATEGORY_NOT_FOUND");
}

#[tokio::test]
async fn non_integer_category_id_returns_404() {
    let app = app();

    let response = get(&app, "/api/v1/categories/rust").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_categories_returns_every_category() {
    let app = app();
    assert_eq!(get(&app, "/api/v1/categories").await.body, json!([]));

    post(&app, "/api/v1/categories", json!({"name": "Rust"})).await;
    post(&app, "/api/v1/categories", json!({"name": "Go"})).await;

    let response = get(&app, "/api/v1/categories").await;
    assert_eq!(response.status, StatusCode::OK);

    let mut names: Vec<String> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Go", "Rust"]);
}

#[tokio::test]
async fn category_tutorials_only_include_that_category() {
    let app = app();
    let rust = post(&app, "/api/v1/categories", json!({"name": "Rust"})).await.body["id"].clone();
    let go = post(&app, "/api/v1/categories", json!({"name": "Go"})).await.body["id"].clone();

    for (title, category) in [("Ownership", &rust), ("Goroutines", &go), ("Traits", &rust)] {
        let response = post(
            &app,
            "/api/v1/tutorials",
            json!({"title": title, "summary": "", "categoryId": category}),
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = get(&app, &format!("/api/v1/categories/{}/tutorials", rust)).await;

    assert_eq!(response.status, StatusCode::OK);
    let tutorials = response.body.as_array().unwrap();
    assert_eq!(tutorials.len(), 2);
    assert!(tutorials.iter().all(|t| t["categoryId"] == rust));
}

#[tokio::test]
async fn unknown_category_has_no_tutorials() {
    let app = app();

    let response = get(&app, "/api/v1/categories/42/tutorials").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}
