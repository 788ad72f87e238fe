use crate::common::{TestClient, TestStateBuilder, jwt};
use axum::http::StatusCode;
use lms_api::router;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_topic_rejects_empty_fields_before_touching_storage() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .post_json_with_auth(
            &format!("/courses/{}/topics", Uuid::new_v4()),
            &json!({ "name": "", "content": "", "image_urls": [] }),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("validation");

    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Topic name is required"));
    assert!(message.contains("Topic content is required"));
    assert!(message.contains("Topic images are required"));
}

#[tokio::test]
async fn test_create_topic_requires_at_least_one_image() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .post_json_with_auth(
            &format!("/courses/{}/topics", Uuid::new_v4()),
            &json!({
                "name": "Pointers",
                "content": "All about pointers",
                "image_urls": []
            }),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("validation");
}

#[tokio::test]
async fn test_reorder_with_unreachable_store_returns_storage_error() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .put_json_with_auth(
            &format!("/courses/{}/topics/order", Uuid::new_v4()),
            &json!({ "topic_ids": [Uuid::new_v4(), Uuid::new_v4()] }),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("storage");
}

#[tokio::test]
async fn test_progress_category_route_rejects_unknown_category() {
    let state = TestStateBuilder::new()
        .build()
        .expect("Failed to create test state");
    let secret = state.jwt_secret.clone();
    let client = TestClient::new(router::router().with_state(state));

    let token = jwt::instructor_token(&secret);
    let response = client
        .get_with_auth(
            &format!("/students/{}/progress/topics", Uuid::new_v4()),
            &token,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_code("validation");
}
