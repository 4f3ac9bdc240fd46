//! API integration tests, driving the real router in-process

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api, AppState};

const BASE_URL: &str = "/api/v1";

fn app() -> Router {
    api::router(AppState::new())
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_URL, path));

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_test_book(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/books",
        Some(json!({
            "title": "Test Book",
            "author": "Test Author",
            "price": 29.99
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_book() {
    let app = app();
    let body = create_test_book(&app).await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Test Book");
    assert_eq!(body["author"], "Test Author");
    assert_eq!(body["price"], 29.99);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_book_missing_field() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "No Author", "price": 1.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_list_books() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    create_test_book(&app).await;
    create_test_book(&app).await;

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[1]["id"], 2);
}

#[tokio::test]
async fn test_get_book() {
    let app = app();
    let created = create_test_book(&app).await;

    let (status, body) = send(&app, Method::GET, "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");
    assert_eq!(body["message"], "Book with ID 999 not found");
}

#[tokio::test]
async fn test_get_book_malformed_id() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_get_book_id_beyond_i32() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/3000000000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with ID 3000000000 not found");
}

#[tokio::test]
async fn test_update_only_provided_fields() {
    let app = app();
    let created = create_test_book(&app).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/books/1",
        Some(json!({ "title": "Updated" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Updated");
    assert_eq!(body["author"], "Test Author");
    assert_eq!(body["price"], 29.99);
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_rejects_null_field() {
    let app = app();
    let created = create_test_book(&app).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/books/1",
        Some(json!({ "title": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, body) = send(&app, Method::GET, "/books/1", None).await;
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_update_not_found() {
    let app = app();
    create_test_book(&app).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/books/999",
        Some(json!({ "title": "Updated Book" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with ID 999 not found");

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Test Book");
}

#[tokio::test]
async fn test_delete_book() {
    let app = app();
    create_test_book(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Ids are not reused after deletion
    let next = create_test_book(&app).await;
    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/books/{id}"].is_object());
}
