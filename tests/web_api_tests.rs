//! Integration tests for the ButtonVerse Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use buttonverse::catalog::{CatalogData, Library};
use buttonverse::generator::StyleGenerator;
use buttonverse::models::StyleRecord;
use buttonverse::web::{create_router, AppState};

mod fixtures;
use fixtures::{ai_record, SMALL_CATALOG};

/// Generator returning a fixed result.
struct MockGenerator(Option<StyleRecord>);

#[async_trait]
impl StyleGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Option<StyleRecord> {
        self.0.clone()
    }
}

fn small_library() -> Library {
    let data = CatalogData::from_json(SMALL_CATALOG).expect("catalog parses");
    Library::from_catalog(&data).expect("library builds")
}

fn app(generator: Option<Arc<dyn StyleGenerator>>) -> Router {
    create_router(AppState::new(small_library(), generator))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = app(None);
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["styles"], 13);
    assert_eq!(body["generator"], false);
}

#[tokio::test]
async fn test_list_styles() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 13);
    assert_eq!(body["styles"][0]["id"], "grad-test");
}

#[tokio::test]
async fn test_list_styles_filtered() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles?category=primary&search=PILL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let ids: Vec<&str> = body["styles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["gen-0-Blue-Pill", "gen-0-Red-Pill"]);
}

#[tokio::test]
async fn test_list_styles_category_all() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles?category=all&search=orange").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_list_styles_invalid_category() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles?category=tertiary").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid category");
}

#[tokio::test]
async fn test_get_style() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles/gen-1-Red-Smooth").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Red Classic Link");
    assert_eq!(body["category"], "link");
}

#[tokio::test]
async fn test_get_style_not_found() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_get_snippet() {
    let app = app(None);
    let (status, body) = get(&app, "/api/styles/gen-0-Blue-Circle/snippet").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "gen-0-Blue-Circle");
    assert_eq!(body["label"], "+");
    assert!(body["jsx"].as_str().unwrap().contains("<Plus size={24} />"));

    let (status, _) = get(&app, "/api/styles/nope/snippet").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_categories() {
    let app = app(None);
    let (status, body) = get(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 21);
    assert_eq!(categories[0], json!({ "id": "primary", "name": "Primary", "count": 10 }));
}

#[tokio::test]
async fn test_generate_appends_style() {
    let generator: Arc<dyn StyleGenerator> = Arc::new(MockGenerator(Some(ai_record("Neon Pulse"))));
    let app = app(Some(generator));

    let (status, body) = post_json(&app, "/api/generate", &json!({ "prompt": "neon" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "ai-neon-pulse");
    assert_eq!(body["category"], "ai-generated");

    let (_, list) = get(&app, "/api/styles").await;
    assert_eq!(list["total"], 14);
    assert_eq!(list["styles"][13]["id"], "ai-neon-pulse");

    let (_, list) = get(&app, "/api/styles?category=ai-generated").await;
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn test_generate_failure_leaves_library_unchanged() {
    let generator: Arc<dyn StyleGenerator> = Arc::new(MockGenerator(None));
    let app = app(Some(generator));

    let (status, body) = post_json(&app, "/api/generate", &json!({ "prompt": "neon" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Style generation failed");

    let (_, list) = get(&app, "/api/styles").await;
    assert_eq!(list["total"], 13);
}

#[tokio::test]
async fn test_generate_blank_prompt() {
    let generator: Arc<dyn StyleGenerator> = Arc::new(MockGenerator(Some(ai_record("X"))));
    let app = app(Some(generator));

    let (status, _) = post_json(&app, "/api/generate", &json!({ "prompt": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = get(&app, "/api/styles").await;
    assert_eq!(list["total"], 13);
}

#[tokio::test]
async fn test_generate_without_generator() {
    let app = app(None);
    let (status, body) = post_json(&app, "/api/generate", &json!({ "prompt": "neon" })).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["details"].as_str().unwrap().contains("GEMINI_API_KEY"));
}
