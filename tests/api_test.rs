//! Integration tests for the User endpoints.
//!
//! Every test drives the real router over a fresh in-memory store, so no
//! state leaks between tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_admin::api::create_router;
use user_admin::infra::UserRepository;
use user_admin::{AppState, InMemoryUserStore, User};

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(users: Vec<User>) -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::with_users(users));
    let app = create_router(AppState::with_store(store.clone()));
    (app, store)
}

fn alice_and_bob() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
    ]
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_redirects_to_list(response: &Response) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/User");
}

// =============================================================================
// List & Details
// =============================================================================

#[tokio::test]
async fn test_list_returns_users_in_creation_order() {
    let (app, _) = app_with(vec![]);

    for (id, name) in [(3, "Carol"), (1, "Alice"), (2, "Bob")] {
        let response = send(&app, post_form("/User/Create", &format!("id={id}&name={name}"))).await;
        assert_redirects_to_list(&response);
    }

    let response = send(&app, get("/User")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ids: Vec<i64> = body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let (app, _) = app_with(alice_and_bob());

    let first = body_json(send(&app, get("/User")).await).await;
    let second = body_json(send(&app, get("/User")).await).await;
    let index = body_json(send(&app, get("/User/Index")).await).await;

    assert_eq!(first, second);
    assert_eq!(first, index);
}

#[tokio::test]
async fn test_details_returns_user() {
    let (app, _) = app_with(alice_and_bob());

    let response = send(&app, get("/User/Details/2")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": 2, "name": "Bob", "email": "bob@example.com"})
    );
}

#[tokio::test]
async fn test_details_returns_first_of_duplicate_ids() {
    let (app, _) = app_with(vec![
        User::new(5, "First", "first@example.com"),
        User::new(5, "Second", "second@example.com"),
    ]);

    let body = body_json(send(&app, get("/User/Details/5")).await).await;
    assert_eq!(body["name"], "First");
}

#[tokio::test]
async fn test_details_unknown_user_is_not_found() {
    let (app, _) = app_with(vec![]);

    let response = send(&app, get("/User/Details/99")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_form_is_blank() {
    let (app, _) = app_with(vec![]);

    let response = send(&app, get("/User/Create")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": 0, "name": null, "email": null})
    );
}

#[tokio::test]
async fn test_create_valid_user_redirects_and_stores() {
    let (app, store) = app_with(vec![]);

    let response = send(
        &app,
        post_form("/User/Create", "id=1&name=Test+User&email=test%40example.com"),
    )
    .await;

    assert_redirects_to_list(&response);
    assert_eq!(
        store.list().await.unwrap(),
        vec![User::new(1, "Test User", "test@example.com")]
    );
}

#[tokio::test]
async fn test_create_accepts_json_and_duplicate_ids() {
    let (app, store) = app_with(alice_and_bob());

    let response = send(
        &app,
        post_json("/User/Create", json!({"id": 1, "name": "Another Alice"})),
    )
    .await;

    assert_redirects_to_list(&response);
    let users = store.list().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2].name.as_deref(), Some("Another Alice"));
    assert_eq!(users[2].email, None);
}

#[tokio::test]
async fn test_create_invalid_user_redisplays_without_storing() {
    let (app, store) = app_with(alice_and_bob());

    let response = send(&app, post_form("/User/Create", "id=1&name=&email=")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["model"], json!({"id": 1, "name": null, "email": null}));
    assert_eq!(body["errors"][0]["field"], "name");
    assert_eq!(body["errors"][0]["message"], "Name is required");
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_create_unreadable_body_is_bad_request() {
    let (app, store) = app_with(vec![]);

    let response = send(&app, post_form("/User/Create", "id=abc&name=Zed")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.count().await.unwrap(), 0);
}

// =============================================================================
// Edit
// =============================================================================

#[tokio::test]
async fn test_edit_form_returns_user() {
    let (app, _) = app_with(alice_and_bob());

    let body = body_json(send(&app, get("/User/Edit/1")).await).await;
    assert_eq!(body["name"], "Alice");

    let response = send(&app, get("/User/Edit/99")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_changes_only_name() {
    let (app, store) = app_with(alice_and_bob());

    let response = send(
        &app,
        post_form("/User/Edit/1", "id=7&name=Alicia&email=other%40example.com"),
    )
    .await;

    assert_redirects_to_list(&response);
    assert_eq!(
        store.list().await.unwrap(),
        vec![
            User::new(1, "Alicia", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ]
    );
}

#[tokio::test]
async fn test_edit_invalid_payload_redisplays_without_change() {
    let (app, store) = app_with(alice_and_bob());

    let response = send(
        &app,
        post_json("/User/Edit/1", json!({"id": 1, "email": "not-an-email"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["model"]["email"], "not-an-email");
    assert_eq!(store.list().await.unwrap(), alice_and_bob());
}

#[tokio::test]
async fn test_edit_invalid_payload_for_unknown_user_still_redisplays() {
    let (app, _) = app_with(vec![]);

    let response = send(&app, post_form("/User/Edit/99", "id=99")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_edit_unknown_user_is_not_found() {
    let (app, store) = app_with(alice_and_bob());

    let response = send(&app, post_form("/User/Edit/99", "id=99&name=Nobody")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.list().await.unwrap(), alice_and_bob());
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_confirmation_returns_user() {
    let (app, _) = app_with(alice_and_bob());

    let body = body_json(send(&app, get("/User/Delete/2")).await).await;
    assert_eq!(body["email"], "bob@example.com");

    let response = send(&app, get("/User/Delete/99")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_first_match_only() {
    let (app, store) = app_with(vec![
        User::new(1, "First", "first@example.com"),
        User::new(2, "Bob", "bob@example.com"),
        User::new(1, "Second", "second@example.com"),
    ]);

    let response = send(&app, post_form("/User/Delete/1", "")).await;

    assert_redirects_to_list(&response);
    assert_eq!(
        store.list().await.unwrap(),
        vec![
            User::new(2, "Bob", "bob@example.com"),
            User::new(1, "Second", "second@example.com"),
        ]
    );
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let (app, store) = app_with(alice_and_bob());

    let response = send(&app, post_form("/User/Delete/99", "confirm=yes")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.count().await.unwrap(), 2);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_blank_query_is_empty() {
    let (app, _) = app_with(alice_and_bob());

    for uri in [
        "/User/Search",
        "/User/Search?query=",
        "/User/Search?query=%20%20%20",
    ] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]), "{}", uri);
    }
}

#[tokio::test]
async fn test_search_matches_name_or_email_ignoring_case() {
    let (app, _) = app_with(alice_and_bob());

    let body = body_json(send(&app, get("/User/Search?query=alice")).await).await;
    assert_eq!(body, json!([{"id": 1, "name": "Alice", "email": "alice@example.com"}]));

    let body = body_json(send(&app, get("/User/Search?query=bob%40EXAMPLE.com")).await).await;
    assert_eq!(body, json!([{"id": 2, "name": "Bob", "email": "bob@example.com"}]));

    let body = body_json(send(&app, get("/User/Search?query=example.com")).await).await;
    let ids: Vec<_> = body.as_array().unwrap().iter().map(|u| u["id"].clone()).collect();
    assert_eq!(ids, vec![json!(1), json!(2)]);
}

#[tokio::test]
async fn test_search_skips_missing_fields() {
    let (app, _) = app_with(vec![
        User {
            id: 1,
            name: None,
            email: Some("ghost@example.com".to_string()),
        },
        User {
            id: 2,
            name: Some("Ghostly".to_string()),
            email: None,
        },
    ]);

    let body = body_json(send(&app, get("/User/Search?query=GHOST")).await).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let (app, _) = app_with(vec![
        User::new(1, "ΟΔΟΣ", "odos@example.com"),
        User::new(2, "ÉLODIE", "elodie@example.com"),
    ]);

    // "Σ" appears literally in "ΟΔΟΣ"
    let body = body_json(send(&app, get("/User/Search?query=%CE%A3")).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 1);

    // "élodie"
    let body = body_json(send(&app, get("/User/Search?query=%C3%A9lodie")).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 2);
}

// =============================================================================
// Service Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_user_count() {
    let (app, _) = app_with(alice_and_bob());

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy", "users": 2}));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = app_with(vec![]);

    let response = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/User/Search"].is_object());
}
