use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{code, course, quiz, state::ApiState, student, topic, video};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(course::routes())
        .merge(topic::routes())
        .merge(video::routes())
        .merge(quiz::routes())
        .merge(code::routes())
        .merge(student::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
