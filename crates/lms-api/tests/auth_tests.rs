use crate::common::{TestClient, TestStateBuilder, jwt};
use axum::http::StatusCode;
use lms_api::router;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_health_endpoint() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    let response = client.get("/health").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    let response = client.get("/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_course_without_token_is_unauthenticated() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    let response = client
        .post_json(
            "/courses",
            &json!({
                "name": "Rust 101",
                "description": "Intro course",
                "image_url": "https://cdn.example/rust.png"
            }),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_error_code("unauthenticated");
}

#[tokio::test]
async fn test_reorder_without_token_is_unauthenticated() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    let course_id = Uuid::new_v4();
    let response = client
        .put_json(
            &format!("/courses/{course_id}/topics/order"),
            &json!({ "topic_ids": [Uuid::new_v4()] }),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_error_code("unauthenticated");
}

#[tokio::test]
async fn test_garbage_token_is_unauthenticated() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    let response = client
        .post_json_with_auth(
            "/courses",
            &json!({
                "name": "Rust 101",
                "description": "Intro course",
                "image_url": "https://cdn.example/rust.png"
            }),
            "not.a.token",
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_error_code("unauthenticated");
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_is_rejected() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let client = TestClient::new(router::router().with_state(state));

    let forged = jwt::instructor_token("wrong_jwt_secret_minimum_32_characters_long");
    let response = client
        .post_json_with_auth(
            "/courses",
            &json!({
                "name": "Rust 101",
                "description": "Intro course",
                "image_url": "https://cdn.example/rust.png"
            }),
            &forged,
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_hard_delete_requires_admin() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .delete_with_auth(&format!("/courses/{}", Uuid::new_v4()), &token)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_error_code("forbidden");
}

#[tokio::test]
async fn test_admin_token_passes_the_delete_gate() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    // The admin gate passes and the handler proceeds to storage, which is
    // unreachable in this harness.
    let token = jwt::admin_token(&secret);
    let response = client
        .delete_with_auth(&format!("/courses/{}", Uuid::new_v4()), &token)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("storage");
}
