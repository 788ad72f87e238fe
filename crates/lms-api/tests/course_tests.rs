use crate::common::{TestClient, TestStateBuilder, jwt};
use axum::http::StatusCode;
use lms_api::router;
use serde_json::json;

#[tokio::test]
async fn test_create_course_rejects_empty_name() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .post_json_with_auth(
            "/courses",
            &json!({
                "name": "",
                "description": "Intro course",
                "image_url": "https://cdn.example/rust.png"
            }),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("validation");

    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Course name is required")
    );
}

#[tokio::test]
async fn test_create_course_reports_every_missing_field() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .post_json_with_auth(
            "/courses",
            &json!({ "name": "", "description": "", "image_url": "" }),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Course name is required"));
    assert!(message.contains("Course description is required"));
    assert!(message.contains("Course image is required"));
}

#[tokio::test]
async fn test_create_course_with_unreachable_store_returns_storage_error() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .post_json_with_auth(
            "/courses",
            &json!({
                "name": "Rust 101",
                "description": "Intro course",
                "image_url": "https://cdn.example/rust.png"
            }),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("storage");

    // The raw database error must not leak into the user-facing message.
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"].as_str(),
        Some("Oops! something went wrong. Try again")
    );
}

#[tokio::test]
async fn test_list_courses_with_unreachable_store_returns_storage_error() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    // Listings are not fail-soft; only progress aggregation is.
    let response = client.get("/courses").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("storage");
}
