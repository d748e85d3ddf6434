#![allow(dead_code)]

use axum_test::TestServer;
use course_library::config::Environment;
use course_library::infrastructure::persistence::InMemoryRepositoryFactory;
use course_library::routes::app_router;
use course_library::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryRepositoryFactory::new()),
        Environment::Development,
        None,
    )
}

pub fn make_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

pub fn make_server_with_base_url(base_url: &str) -> TestServer {
    let state = AppState::new(
        Arc::new(InMemoryRepositoryFactory::new()),
        Environment::Production,
        Some(base_url.to_string()),
    );
    TestServer::new(app_router(state)).unwrap()
}

pub fn author_payload(first: &str, last: &str, category: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "dateOfBirth": "1980-04-03",
        "mainCategory": category,
    })
}

/// Creates an author through the API and returns its id.
pub async fn create_test_author(
    server: &TestServer,
    first: &str,
    last: &str,
    category: &str,
) -> String {
    let response = server
        .post("/api/authors")
        .json(&author_payload(first, last, category))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Creates a course through the API and returns its id.
pub async fn create_test_course(server: &TestServer, author_id: &str, title: &str) -> String {
    let response = server
        .post(&format!("/api/authors/{author_id}/courses"))
        .json(&json!({ "title": title }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}
